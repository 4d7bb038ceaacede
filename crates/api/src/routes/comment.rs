use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use jazbaa_db::models::{Comment, CommentType};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, extractors::auth::AuthUser, state::AppState};

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub comment: String,
    #[serde(default)]
    pub comment_type: CommentType,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub startup_slug: String,
    pub investor_id: String,
    pub investor_name: String,
    pub comment: String,
    pub comment_type: CommentType,
    pub created_at: String,
}

fn to_response(c: Comment) -> CommentResponse {
    CommentResponse {
        id: c.id.map(|id| id.to_hex()).unwrap_or_default(),
        startup_slug: c.startup_slug,
        investor_id: c.investor_id.to_hex(),
        investor_name: c.investor_name,
        comment: c.comment,
        comment_type: c.comment_type,
        created_at: c.created_at.try_to_rfc3339_string().unwrap_or_default(),
    }
}

/// Append an investor comment. Comments are never edited or deleted.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
    Json(body): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    auth.require_investor()?;

    if body.comment.trim().is_empty() {
        return Err(ApiError::Validation("Comment must not be empty".to_string()));
    }

    state.startups.find_by_slug(&slug).await?;

    let user = state.users.base.find_by_id(auth.user_id).await?;
    let comment = state
        .comments
        .add(
            &slug,
            auth.user_id,
            &user.display_name,
            body.comment.trim(),
            body.comment_type,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(to_response(comment))))
}

pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(slug): Path<String>,
) -> Result<Json<Vec<CommentResponse>>, ApiError> {
    let comments = state.comments.list_for_startup(&slug).await?;
    Ok(Json(comments.into_iter().map(to_response).collect()))
}
