use std::collections::HashSet;

use crate::models::status::Status;
use crate::models::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

/// Client-side view settings over the roster: text search, multi-select
/// status filter and a two-key sort toggle. Filters combine with AND.
#[derive(Debug, Clone)]
pub struct RosterQuery {
    pub search: String,
    pub statuses: HashSet<Status>,
    pub sort_key: SortKey,
    pub sort_dir: SortDir,
}

impl Default for RosterQuery {
    fn default() -> Self {
        RosterQuery {
            search: String::new(),
            statuses: Status::ALL.into_iter().collect(),
            sort_key: SortKey::Name,
            sort_dir: SortDir::Asc,
        }
    }
}

impl RosterQuery {
    pub fn toggle_status(&mut self, status: Status) {
        if !self.statuses.remove(&status) {
            self.statuses.insert(status);
        }
    }

    /// Same key flips direction; a new key starts ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_dir = match self.sort_dir {
                SortDir::Asc => SortDir::Desc,
                SortDir::Desc => SortDir::Asc,
            };
        } else {
            self.sort_key = key;
            self.sort_dir = SortDir::Asc;
        }
    }

    /// Produce the rows to display. The viewer's own row is always excluded.
    /// An emptied status selection disables the status filter entirely,
    /// matching the shipped behavior.
    pub fn apply(&self, roster: &[User], viewer_id: i64) -> Vec<User> {
        let needle = self.search.trim().to_lowercase();
        let mut rows: Vec<User> = roster
            .iter()
            .filter(|u| u.id != viewer_id)
            .filter(|u| needle.is_empty() || u.full_name().to_lowercase().contains(&needle))
            .filter(|u| self.statuses.is_empty() || self.statuses.contains(&u.status))
            .cloned()
            .collect();
        // Stable sort; reversing the comparator (not the rows) keeps ties in
        // their original roster order in both directions.
        rows.sort_by(|a, b| {
            let ord = match self.sort_key {
                SortKey::Name => a
                    .full_name()
                    .to_lowercase()
                    .cmp(&b.full_name().to_lowercase()),
                SortKey::Status => a.status.canonical().cmp(&b.status.canonical()),
            };
            match self.sort_dir {
                SortDir::Asc => ord,
                SortDir::Desc => ord.reverse(),
            }
        });
        rows
    }
}
