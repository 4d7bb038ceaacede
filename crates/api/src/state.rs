use mongodb::Database;
use jazbaa_config::Settings;
use jazbaa_db::models::UserRole;
use jazbaa_services::{
    AuthService, Mailer,
    dao::{comment::CommentDao, invite::InviteDao, startup::StartupDao, user::UserDao},
    storage::BlobStore,
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub settings: Settings,
    pub auth: Arc<AuthService>,
    pub users: Arc<UserDao>,
    pub invites: Arc<InviteDao>,
    pub startups: Arc<StartupDao>,
    pub comments: Arc<CommentDao>,
    pub mailer: Arc<Mailer>,
    pub blobs: Arc<dyn BlobStore>,
}

impl AppState {
    pub async fn new(
        db: Database,
        settings: Settings,
        blobs: Arc<dyn BlobStore>,
    ) -> anyhow::Result<Self> {
        let auth = Arc::new(AuthService::new(settings.jwt.clone()));
        let users = Arc::new(UserDao::new(&db));
        let invites = Arc::new(InviteDao::new(&db));
        let startups = Arc::new(StartupDao::new(&db));
        let comments = Arc::new(CommentDao::new(&db));
        let mailer = Arc::new(Mailer::new(
            &settings.smtp,
            settings.app.public_base_url.clone(),
        )?);

        let state = Self {
            db,
            settings,
            auth,
            users,
            invites,
            startups,
            comments,
            mailer,
            blobs,
        };

        state.bootstrap_admin().await?;

        Ok(state)
    }

    /// Seed the initial admin account when the users collection is empty
    /// and bootstrap credentials are configured. Without an admin no one
    /// can issue invites or create further users.
    async fn bootstrap_admin(&self) -> anyhow::Result<()> {
        let Some(bootstrap) = &self.settings.bootstrap else {
            return Ok(());
        };
        if self.users.count_all().await? > 0 {
            return Ok(());
        }

        let password_hash = self.auth.hash_password(&bootstrap.admin_password)?;
        self.users
            .create(
                bootstrap.admin_email.clone(),
                bootstrap
                    .admin_display_name
                    .clone()
                    .unwrap_or_else(|| "Administrator".to_string()),
                UserRole::Admin,
                None,
                None,
                password_hash,
            )
            .await?;

        info!(email = %bootstrap.admin_email, "Bootstrapped initial admin user");
        Ok(())
    }
}
