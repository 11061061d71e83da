use crate::dtos::roster::UserNameStatus;
use crate::models::status::Status;

/// A roster row after boundary conversion: status is always canonical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub status: Status,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<UserNameStatus> for User {
    fn from(row: UserNameStatus) -> Self {
        User {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            status: Status::canonicalize(row.status.as_deref()),
        }
    }
}
