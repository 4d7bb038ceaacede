use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub jwt: JwtSettings,
    pub smtp: SmtpSettings,
    pub storage: StorageSettings,
    pub bootstrap: Option<BootstrapSettings>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub host: String,
    pub port: u16,
    /// Public origin used in emailed links (/register/<token>, /startup/<slug>).
    pub public_base_url: String,
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub name: String,
    pub max_pool_size: Option<u32>,
    pub min_pool_size: Option<u32>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub access_token_ttl_secs: u64,
    pub refresh_token_ttl_secs: u64,
    pub issuer: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub upload_dir: String,
    pub public_path: String,
}

/// Optional initial admin, created at startup only when the users
/// collection is empty.
#[derive(Debug, Deserialize, Clone)]
pub struct BootstrapSettings {
    pub admin_email: String,
    pub admin_password: String,
    pub admin_display_name: Option<String>,
}

impl Settings {
    /// Load settings from config files and JAZBAA__* environment variables.
    ///
    /// The JWT secret and all SMTP credentials carry no defaults: loading
    /// fails if they are absent, so the process refuses to start rather
    /// than running with a literal fallback secret.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::default()
                    .separator("__")
                    .prefix("JAZBAA"),
            )
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", 3000)?
            .set_default("app.public_base_url", "http://localhost:3000")?
            .set_default("app.cors_origins", Vec::<String>::new())?
            .set_default("database.url", "mongodb://localhost:27017")?
            .set_default("database.name", "jazbaa")?
            .set_default("jwt.access_token_ttl_secs", 3600)?
            .set_default("jwt.refresh_token_ttl_secs", 604800)?
            .set_default("jwt.issuer", "jazbaa")?
            .set_default("smtp.port", 587)?
            .set_default("storage.upload_dir", "/tmp/jazbaa-uploads")?
            .set_default("storage.public_path", "/uploads")?
            .build()?;

        config.try_deserialize()
    }
}
