use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::{info, warn};
use validator::ValidateEmail;

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    #[serde(default = "default_contact_type")]
    pub contact_type: String,
}

fn default_contact_type() -> String {
    "general".to_string()
}

/// Public contact form. The submission is logged and acknowledged by
/// email best-effort; acknowledgment failure never fails the request.
pub async fn submit(
    State(state): State<AppState>,
    Json(body): Json<ContactRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if body.name.trim().is_empty() || body.message.trim().is_empty() {
        return Err(ApiError::Validation(
            "Name and message are required".to_string(),
        ));
    }
    if !body.email.validate_email() {
        return Err(ApiError::Validation("Invalid email address".to_string()));
    }

    info!(
        name = %body.name,
        email = %body.email,
        phone = ?body.phone,
        contact_type = %body.contact_type,
        "Contact form submission"
    );

    if let Err(e) = state
        .mailer
        .send_contact_ack(&body.email, body.name.trim(), &body.contact_type)
        .await
    {
        warn!(email = %body.email, error = %e, "Contact acknowledgment email failed");
    }

    Ok(Json(serde_json::json!({
        "message": "Thanks for reaching out; we'll get back to you shortly."
    })))
}
