use chrono::{DateTime, Utc};

use crate::api::Backend;
use crate::error::ApiError;
use crate::models::status::Status;
use crate::models::user::User;
use crate::roster::RosterQuery;
use crate::session::Session;

/// State behind the authenticated view: the roster, the viewer's own status
/// mirrored from it, and the backend that feeds both.
pub struct StatusBoard {
    backend: Backend,
    pub session: Session,
    roster: Vec<User>,
    me_status: Status,
    pub last_updated: Option<DateTime<Utc>>,
}

impl StatusBoard {
    pub fn new(backend: Backend, session: Session) -> StatusBoard {
        StatusBoard {
            backend,
            session,
            roster: Vec::new(),
            me_status: Status::Working,
            last_updated: None,
        }
    }

    pub fn me_status(&self) -> Status {
        self.me_status
    }

    pub fn roster(&self) -> &[User] {
        &self.roster
    }

    /// Fetch the viewer's own status via the dedicated endpoint.
    pub async fn load_me_status(&mut self) -> Result<(), ApiError> {
        let row = self.backend.user_status(self.session.user_id).await?;
        self.me_status = Status::canonicalize(row.status.as_deref());
        Ok(())
    }

    /// Replace the roster wholesale and re-mirror the viewer's own status
    /// from its row. No diffing.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let rows = self.backend.roster().await?;
        self.roster = rows.into_iter().map(User::from).collect();
        if let Some(me) = self.roster.iter().find(|u| u.id == self.session.user_id) {
            self.me_status = me.status;
        }
        self.last_updated = Some(Utc::now());
        Ok(())
    }

    /// Optimistic update of the viewer's own status. The new value is written
    /// locally first; any failure rolls it back. On success the roster row is
    /// patched by id so the table agrees without waiting for the next poll.
    /// Returns false when the value is already current and nothing was sent.
    pub async fn set_my_status(&mut self, next: Status) -> Result<bool, ApiError> {
        if next == self.me_status {
            return Ok(false);
        }
        let prev = self.me_status;
        self.me_status = next;
        match self
            .backend
            .update_status(self.session.user_id, next)
            .await
        {
            Ok(()) => {
                for row in &mut self.roster {
                    if row.id == self.session.user_id {
                        row.status = next;
                    }
                }
                Ok(true)
            }
            Err(err) => {
                self.me_status = prev;
                tracing::warn!(error = %err, "status update failed, rolled back");
                Err(err)
            }
        }
    }

    pub fn view(&self, query: &RosterQuery) -> Vec<User> {
        query.apply(&self.roster, self.session.user_id)
    }
}
