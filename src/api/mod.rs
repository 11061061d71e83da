pub mod client;
pub mod seed;

use crate::config::Config;
use crate::dtos::auth::UserPublic;
use crate::dtos::roster::UserNameStatus;
use crate::error::ApiError;
use crate::models::status::Status;

pub use client::ApiClient;
pub use seed::SeedDirectory;

/// The two transports the app has shipped with: a thin client against the
/// HTTP API, and a fully seeded in-memory directory.
#[derive(Clone)]
pub enum Backend {
    Http(ApiClient),
    Seeded(SeedDirectory),
}

impl Backend {
    pub fn from_config(config: &Config) -> Result<Backend, ApiError> {
        if config.seed_mode {
            Ok(Backend::Seeded(SeedDirectory::new()))
        } else {
            Ok(Backend::Http(ApiClient::new(config)?))
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<UserPublic, ApiError> {
        match self {
            Backend::Http(client) => client.login(email, password).await,
            Backend::Seeded(seed) => seed.login(email, password),
        }
    }

    /// Best effort; callers fire this from a detached task and ignore the
    /// outcome.
    pub async fn logout(&self) {
        match self {
            Backend::Http(client) => client.logout().await,
            Backend::Seeded(_) => {}
        }
    }

    pub async fn roster(&self) -> Result<Vec<UserNameStatus>, ApiError> {
        match self {
            Backend::Http(client) => client.roster().await,
            Backend::Seeded(seed) => Ok(seed.roster()),
        }
    }

    pub async fn user_status(&self, user_id: i64) -> Result<UserNameStatus, ApiError> {
        match self {
            Backend::Http(client) => client.user_status(user_id).await,
            Backend::Seeded(seed) => seed.user_status(user_id),
        }
    }

    pub async fn update_status(&self, user_id: i64, status: Status) -> Result<(), ApiError> {
        match self {
            Backend::Http(client) => client.update_status(user_id, status).await,
            Backend::Seeded(seed) => seed.update_status(user_id, status),
        }
    }
}
