pub mod auth;
pub mod dao;
pub mod mailer;
pub mod profile;
pub mod storage;

pub use auth::AuthService;
pub use dao::*;
pub use mailer::Mailer;
pub use storage::{BlobStore, LocalBlobStore};
