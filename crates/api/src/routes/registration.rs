use std::collections::HashMap;

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use jazbaa_db::models::InviteStatus;
use jazbaa_services::dao::base::DaoError;
use serde::Serialize;
use tracing::warn;

use jazbaa_services::profile::{self, Attachment, Attachments, ProfileForm};

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub slug: String,
    pub profile_url: String,
    pub email_sent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_error: Option<String>,
}

/// Complete a registration: resolve the invite token, assemble the
/// profile from the multipart form, publish it, and send the welcome
/// email best-effort.
///
/// An invite-status update failure after the profile write still returns
/// 201 — the profile is live at that point and telling the founder their
/// registration failed would be wrong.
pub async fn register(
    State(state): State<AppState>,
    Path(token): Path<String>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<RegistrationResponse>), ApiError> {
    let invite = state.invites.find_by_token(&token).await.map_err(|e| match e {
        DaoError::NotFound => ApiError::NotFound("Invite not found".to_string()),
        other => other.into(),
    })?;

    if invite.status == InviteStatus::Registered {
        return Err(ApiError::InviteUsed(
            "This invite link has already been used".to_string(),
        ));
    }

    let (form, attachments) = read_form(multipart).await?;

    let record = profile::assemble(form, attachments, state.blobs.as_ref(), &invite.email).await?;

    let outcome = profile::publish(&state.startups, &state.invites, &record, &invite).await?;

    let (email_sent, email_error) = match state
        .mailer
        .send_welcome(&invite.email, &record.name, &outcome.slug)
        .await
    {
        Ok(()) => (true, None),
        Err(e) => {
            warn!(email = %invite.email, error = %e, "Welcome email delivery failed");
            (false, Some(e.to_string()))
        }
    };

    let response = RegistrationResponse {
        profile_url: state.mailer.profile_url(&outcome.slug),
        slug: outcome.slug,
        email_sent,
        email_error,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Split the multipart stream into text fields and binary attachments.
/// Attachment fields: `logo`, `pitch_deck`, `team_photo_<index>`.
async fn read_form(mut multipart: Multipart) -> Result<(ProfileForm, Attachments), ApiError> {
    let mut text_fields: HashMap<String, String> = HashMap::new();
    let mut attachments = Attachments::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Multipart error: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "logo" || name == "pitch_deck" || name.starts_with("team_photo_") {
            let filename = field.file_name().unwrap_or("unnamed").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read {}: {}", name, e)))?;

            let attachment = Attachment {
                filename,
                content_type,
                bytes: bytes.to_vec(),
            };

            match name.as_str() {
                "logo" => attachments.logo = Some(attachment),
                "pitch_deck" => attachments.pitch_deck = Some(attachment),
                other => {
                    let index = other
                        .trim_start_matches("team_photo_")
                        .parse::<usize>()
                        .map_err(|_| {
                            ApiError::BadRequest(format!("Invalid attachment field: {}", other))
                        })?;
                    attachments.team_photos.insert(index, attachment);
                }
            }
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read {}: {}", name, e)))?;
            text_fields.insert(name, value);
        }
    }

    let form = ProfileForm::from_fields(&text_fields)?;
    Ok((form, attachments))
}
