use crate::error::ApiError;

/// The one notification mechanism in the app. Every transient message the
/// user sees goes through a Notice; the binary prints them, tests inspect
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub title: String,
    pub detail: Option<String>,
}

impl Notice {
    pub fn success(title: impl Into<String>) -> Notice {
        Notice {
            level: Level::Success,
            title: title.into(),
            detail: None,
        }
    }

    pub fn info(title: impl Into<String>) -> Notice {
        Notice {
            level: Level::Info,
            title: title.into(),
            detail: None,
        }
    }

    pub fn error(title: impl Into<String>, detail: impl Into<String>) -> Notice {
        Notice {
            level: Level::Error,
            title: title.into(),
            detail: Some(detail.into()),
        }
    }

    /// Map a failure category to its transient notice. Titles are stable per
    /// category; the detail is the error's own user text.
    pub fn for_error(err: &ApiError) -> Notice {
        let title = match err {
            ApiError::MissingInput => "Missing details",
            ApiError::InvalidCredentials => "Login failed",
            ApiError::SessionExpired => "Session expired",
            ApiError::Timeout => "Request timed out",
            ApiError::Network(_) => "Network error",
            ApiError::NotFound(_) | ApiError::Validation(_) | ApiError::Server { .. } => {
                "Request failed"
            }
        };
        Notice::error(title, err.to_string())
    }

    /// Render to the terminal, toast-style.
    pub fn emit(&self) {
        let tag = match self.level {
            Level::Success => "ok",
            Level::Error => "error",
            Level::Info => "info",
        };
        match &self.detail {
            Some(detail) => println!("[{tag}] {}: {detail}", self.title),
            None => println!("[{tag}] {}", self.title),
        }
    }
}
