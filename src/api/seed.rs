use std::sync::{Arc, Mutex};

use crate::dtos::auth::UserPublic;
use crate::dtos::roster::UserNameStatus;
use crate::error::ApiError;
use crate::models::status::Status;

struct SeedUser {
    id: i64,
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    // Plaintext seed value; this directory only exists for the offline
    // revision and never talks to a real credential store.
    password: &'static str,
    status: Status,
}

/// In-memory user directory backing the fully mocked revision of the app.
/// Statuses are handed out as backend db strings so they cross the same
/// canonicalization boundary as HTTP responses.
#[derive(Clone)]
pub struct SeedDirectory {
    inner: Arc<Mutex<Vec<SeedUser>>>,
}

impl SeedDirectory {
    pub fn new() -> SeedDirectory {
        let users = vec![
            SeedUser {
                id: 1,
                first_name: "Diana",
                last_name: "Tesler",
                email: "diana.tesler@example.com",
                password: "diana1234",
                status: Status::WorkingRemotely,
            },
            SeedUser {
                id: 2,
                first_name: "Noam",
                last_name: "Peled",
                email: "noam.peled@example.com",
                password: "noam1234",
                status: Status::OnVacation,
            },
            SeedUser {
                id: 3,
                first_name: "Omer",
                last_name: "Shahar",
                email: "omer.shahar@example.com",
                password: "omer1234",
                status: Status::Working,
            },
            SeedUser {
                id: 4,
                first_name: "Maya",
                last_name: "Rosen",
                email: "maya.rosen@example.com",
                password: "maya1234",
                status: Status::BusinessTrip,
            },
            SeedUser {
                id: 5,
                first_name: "Avi",
                last_name: "Cohen",
                email: "avi.cohen@example.com",
                password: "avi1234",
                status: Status::Working,
            },
        ];
        SeedDirectory {
            inner: Arc::new(Mutex::new(users)),
        }
    }

    pub fn login(&self, email: &str, password: &str) -> Result<UserPublic, ApiError> {
        let users = self.inner.lock().expect("seed directory lock poisoned");
        let user = users
            .iter()
            .find(|u| u.email == email)
            .ok_or(ApiError::InvalidCredentials)?;
        if user.password != password {
            return Err(ApiError::InvalidCredentials);
        }
        Ok(UserPublic {
            id: user.id,
            email: user.email.to_string(),
            first_name: user.first_name.to_string(),
            last_name: user.last_name.to_string(),
        })
    }

    pub fn roster(&self) -> Vec<UserNameStatus> {
        let users = self.inner.lock().expect("seed directory lock poisoned");
        users.iter().map(to_row).collect()
    }

    pub fn user_status(&self, user_id: i64) -> Result<UserNameStatus, ApiError> {
        let users = self.inner.lock().expect("seed directory lock poisoned");
        users
            .iter()
            .find(|u| u.id == user_id)
            .map(to_row)
            .ok_or_else(|| ApiError::not_found("User not found"))
    }

    pub fn update_status(&self, user_id: i64, status: Status) -> Result<(), ApiError> {
        let mut users = self.inner.lock().expect("seed directory lock poisoned");
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| ApiError::not_found("Status not found"))?;
        user.status = status;
        Ok(())
    }
}

impl Default for SeedDirectory {
    fn default() -> Self {
        SeedDirectory::new()
    }
}

fn to_row(u: &SeedUser) -> UserNameStatus {
    UserNameStatus {
        id: u.id,
        first_name: u.first_name.to_string(),
        last_name: u.last_name.to_string(),
        status: Some(u.status.db_value().to_string()),
    }
}
