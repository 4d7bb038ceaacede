pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use state::AppState;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Auth routes
    let auth_routes = Router::new()
        .route("/login", post(routes::auth::login))
        .route("/logout", post(routes::auth::logout))
        .route("/refresh", post(routes::auth::refresh))
        .route("/me", get(routes::auth::me));

    // Admin user management
    let user_routes = Router::new()
        .route("/", get(routes::user::list).post(routes::user::create));

    // Invites: creation/listing are admin-gated, token resolution is the
    // public entry point for the registration form.
    let invite_routes = Router::new()
        .route("/", get(routes::invite::list).post(routes::invite::create))
        .route("/{token}", get(routes::invite::resolve));

    // Registration (public, token-gated). The form carries a logo, a
    // pitch deck and team photos, so it needs more headroom than the
    // default body limit; per-attachment limits are enforced downstream.
    let registration_routes = Router::new()
        .route("/{token}", post(routes::registration::register))
        .layer(DefaultBodyLimit::max(32 * 1024 * 1024));

    // Startup profiles
    let startup_routes = Router::new()
        .route("/", get(routes::startup::list))
        .route("/{slug}", get(routes::startup::get))
        .route("/{slug}/interest", post(routes::startup::toggle_interest))
        .route(
            "/{slug}/like",
            get(routes::startup::like_count).post(routes::startup::like),
        )
        .route(
            "/{slug}/comment",
            get(routes::comment::list).post(routes::comment::create),
        );

    // Compose API
    let api = Router::new()
        .nest("/auth", auth_routes)
        .nest("/user", user_routes)
        .nest("/invite", invite_routes)
        .nest("/register", registration_routes)
        .nest("/startup", startup_routes)
        .route("/contact", post(routes::contact::submit))
        .route("/health", get(health_check));

    Router::new()
        .nest("/api", api)
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
