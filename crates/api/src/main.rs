use std::sync::Arc;

use jazbaa_api::{build_router, state::AppState};
use jazbaa_config::Settings;
use jazbaa_db::{connect, indexes::ensure_indexes};
use jazbaa_services::storage::LocalBlobStore;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (silently ignore if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "jazbaa_api=debug,jazbaa_services=debug,jazbaa_db=debug,tower_http=debug".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config; refuses to start without JWT/SMTP credentials.
    let settings = Settings::load()?;
    info!("Starting JAZBAA API on {}:{}", settings.app.host, settings.app.port);

    // Connect to MongoDB
    let db = connect(&settings).await?;

    // Ensure indexes
    ensure_indexes(&db).await?;

    let blobs = Arc::new(LocalBlobStore::new(
        settings.storage.upload_dir.clone(),
        settings.storage.public_path.clone(),
    ));

    // Build app state (async: may bootstrap the initial admin)
    let app_state = AppState::new(db, settings.clone(), blobs).await?;

    // Build router
    let app = build_router(app_state);

    // Start server
    let addr = format!("{}:{}", settings.app.host, settings.app.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
