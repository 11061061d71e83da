use crate::api::Backend;
use crate::error::ApiError;

/// Local session state for the authenticated view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub display_name: String,
}

/// Trim both inputs and lowercase the email. Empty input is rejected here,
/// before any network call happens.
pub fn normalize_credentials(email: &str, password: &str) -> Result<(String, String), ApiError> {
    let email = email.trim().to_lowercase();
    let password = password.trim().to_string();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::MissingInput);
    }
    Ok((email, password))
}

pub async fn login(backend: &Backend, email: &str, password: &str) -> Result<Session, ApiError> {
    let (email, password) = normalize_credentials(email, password)?;
    let user = backend.login(&email, &password).await?;
    tracing::info!(user_id = user.id, "logged in");
    Ok(Session {
        user_id: user.id,
        display_name: format!("{} {}", user.first_name, user.last_name),
    })
}

/// Best-effort server-side invalidation on a detached task. Local state is
/// the caller's to clear and is cleared regardless of this request's fate.
pub fn logout(backend: &Backend) {
    let backend = backend.clone();
    tokio::spawn(async move {
        backend.logout().await;
    });
}
