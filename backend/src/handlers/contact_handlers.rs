use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

#[derive(Debug, Deserialize, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Accepts a contact form submission. The payload is only traced for now,
/// nothing is stored or forwarded.
pub async fn receive_message(Json(payload): Json<ContactMessage>) -> Json<Value> {
    info!(
        name = %payload.name,
        email = %payload.email,
        message = %payload.message,
        "received contact message"
    );

    Json(json!({ "message": "Message received" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn acknowledges_contact_message() {
        let Json(body) = receive_message(Json(ContactMessage {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            message: "hi".to_string(),
        }))
        .await;

        assert_eq!(body, json!({ "message": "Message received" }));
    }

    #[tokio::test]
    async fn does_not_validate_field_content() {
        let Json(body) = receive_message(Json(ContactMessage {
            name: String::new(),
            email: "not-an-email".to_string(),
            message: String::new(),
        }))
        .await;

        assert_eq!(body, json!({ "message": "Message received" }));
    }
}
