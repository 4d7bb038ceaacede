use axum::{Json, extract::State, http::StatusCode};
use jazbaa_db::models::UserRole;
use serde::Deserialize;
use validator::ValidateEmail;

use crate::{
    error::ApiError,
    extractors::auth::AuthUser,
    routes::auth::{UserResponse, to_user_response},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub role: UserRole,
    pub college_id: Option<String>,
    pub investor_id: Option<String>,
}

/// Admin-only user creation. Role is fixed here; the external id must
/// match the role: college accounts carry a college_id, investor
/// accounts an investor_id, admins neither.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    auth.require_admin()?;

    if !body.email.validate_email() {
        return Err(ApiError::Validation("Invalid email address".to_string()));
    }
    validate_role_ids(&body)?;

    let password_hash = state.auth.hash_password(&body.password)?;
    let user = state
        .users
        .create(
            body.email,
            body.display_name,
            body.role,
            body.college_id,
            body.investor_id,
            password_hash,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(to_user_response(&user))))
}

pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    auth.require_admin()?;

    let users = state.users.list().await?;
    Ok(Json(users.iter().map(to_user_response).collect()))
}

fn validate_role_ids(body: &CreateUserRequest) -> Result<(), ApiError> {
    let ok = match body.role {
        UserRole::College => body.college_id.is_some() && body.investor_id.is_none(),
        UserRole::Investor => body.investor_id.is_some() && body.college_id.is_none(),
        UserRole::Admin => body.college_id.is_none() && body.investor_id.is_none(),
    };
    if !ok {
        return Err(ApiError::Validation(
            "Exactly the id matching the role must be set (college_id for college, \
             investor_id for investor, neither for admin)"
                .to_string(),
        ));
    }
    Ok(())
}
