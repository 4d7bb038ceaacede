use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use jazbaa_services::dao::base::DaoError;
use jazbaa_services::dao::startup::InterestKind;
use jazbaa_services::profile::StartupView;

use crate::{error::ApiError, extractors::auth::AuthUser, state::AppState};

/// Public profile lookup: primary collection, then backup, then 404.
/// The stored record is normalized for display on every read.
pub async fn get(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<StartupView>, ApiError> {
    let startup = state.startups.find_by_slug(&slug).await.map_err(|e| match e {
        DaoError::NotFound => ApiError::NotFound(
            "Profile not found; it may have moved or been deleted".to_string(),
        ),
        other => other.into(),
    })?;

    Ok(Json(StartupView::from(startup)))
}

pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<StartupView>>, ApiError> {
    let startups = state.startups.list_active().await?;
    Ok(Json(startups.into_iter().map(StartupView::from).collect()))
}

#[derive(Debug, Deserialize)]
pub struct InterestRequest {
    pub kind: InterestKindParam,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestKindParam {
    Investment,
    Hiring,
}

impl From<InterestKindParam> for InterestKind {
    fn from(kind: InterestKindParam) -> Self {
        match kind {
            InterestKindParam::Investment => InterestKind::Investment,
            InterestKindParam::Hiring => InterestKind::Hiring,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InterestResponse {
    pub slug: String,
    pub interested: bool,
}

/// Flip the calling investor's membership in the profile's interest set.
pub async fn toggle_interest(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
    Json(body): Json<InterestRequest>,
) -> Result<Json<InterestResponse>, ApiError> {
    auth.require_investor()?;

    let interested = state
        .startups
        .toggle_interest(&slug, &auth.user_id.to_hex(), body.kind.into())
        .await?;

    Ok(Json(InterestResponse { slug, interested }))
}

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub slug: String,
    pub count: i64,
}

pub async fn like(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<LikeResponse>, ApiError> {
    // The counter lives in its own collection keyed by slug; verify the
    // profile exists before counting likes against it.
    state.startups.find_by_slug(&slug).await?;
    let count = state.startups.like(&slug).await?;
    Ok(Json(LikeResponse { slug, count }))
}

pub async fn like_count(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<LikeResponse>, ApiError> {
    let count = state.startups.like_count(&slug).await?;
    Ok(Json(LikeResponse { slug, count }))
}
