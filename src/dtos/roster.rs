use serde::{Deserialize, Serialize};

/// Roster row as the backend sends it. Status is raw text (or null when the
/// user has no status row yet) until canonicalized into a model.
#[derive(Debug, Clone, Deserialize)]
pub struct UserNameStatus {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UsersNameStatusList {
    pub users: Vec<UserNameStatus>,
}

#[derive(Serialize)]
pub struct StatusUpdateRequest {
    pub status: &'static str,
}
