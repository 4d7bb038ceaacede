use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use jazbaa_db::models::InviteStatus;
use jazbaa_services::dao::base::DaoError;
use serde::{Deserialize, Serialize};
use tracing::warn;
use validator::ValidateEmail;

use crate::{error::ApiError, extractors::auth::AuthUser, state::AppState};

#[derive(Debug, Deserialize)]
pub struct CreateInviteRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct InviteResponse {
    pub id: String,
    pub email: String,
    pub token: String,
    pub invite_number: u32,
    pub status: InviteStatus,
    pub register_url: String,
    /// Whether the invite email was delivered. The invite itself always
    /// exists once this endpoint returns 201; on delivery failure the
    /// admin copies register_url to the founder manually.
    pub email_sent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_error: Option<String>,
}

pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateInviteRequest>,
) -> Result<(StatusCode, Json<InviteResponse>), ApiError> {
    auth.require_admin()?;

    if !body.email.validate_email() {
        return Err(ApiError::Validation("Invalid email address".to_string()));
    }

    let invite = state.invites.issue(&body.email, auth.user_id).await?;

    // Delivery is best-effort and never rolls back the persisted invite.
    let (email_sent, email_error) = match state
        .mailer
        .send_invite(&invite.email, &invite.token, invite.invite_number)
        .await
    {
        Ok(()) => (true, None),
        Err(e) => {
            warn!(email = %invite.email, error = %e, "Invite email delivery failed");
            (false, Some(e.to_string()))
        }
    };

    let response = InviteResponse {
        id: invite.id.map(|id| id.to_hex()).unwrap_or_default(),
        register_url: state.mailer.register_url(&invite.token),
        email: invite.email,
        token: invite.token,
        invite_number: invite.invite_number,
        status: invite.status,
        email_sent,
        email_error,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[derive(Debug, Serialize)]
pub struct InviteInfoResponse {
    pub email: String,
    pub invite_number: u32,
    pub status: InviteStatus,
}

/// Public lookup backing the registration form. The email is surfaced as
/// the form's read-only default contact address.
pub async fn resolve(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<InviteInfoResponse>, ApiError> {
    let invite = state.invites.find_by_token(&token).await.map_err(|e| match e {
        DaoError::NotFound => ApiError::NotFound("Invite not found".to_string()),
        other => other.into(),
    })?;

    if invite.status == InviteStatus::Registered {
        return Err(ApiError::InviteUsed(
            "This invite link has already been used".to_string(),
        ));
    }

    Ok(Json(InviteInfoResponse {
        email: invite.email,
        invite_number: invite.invite_number,
        status: invite.status,
    }))
}

#[derive(Debug, Serialize)]
pub struct InviteListItem {
    pub id: String,
    pub email: String,
    pub invite_number: u32,
    pub status: InviteStatus,
    pub startup_slug: Option<String>,
    pub invited_at: String,
}

pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<InviteListItem>>, ApiError> {
    auth.require_admin()?;

    let invites = state.invites.list().await?;
    let items = invites
        .into_iter()
        .map(|i| InviteListItem {
            id: i.id.map(|id| id.to_hex()).unwrap_or_default(),
            email: i.email,
            invite_number: i.invite_number,
            status: i.status,
            startup_slug: i.startup_slug,
            invited_at: i.invited_at.try_to_rfc3339_string().unwrap_or_default(),
        })
        .collect();

    Ok(Json(items))
}
