use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Login response body.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPublic {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}
