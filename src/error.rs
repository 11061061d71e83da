use thiserror::Error;

/// Every way a board operation can fail. Display strings double as the
/// transient notice text shown to the user; nothing here is fatal.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Enter your email and password.")]
    MissingInput,
    #[error("Wrong email or password.")]
    InvalidCredentials,
    #[error("Please log in again.")]
    SessionExpired,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{detail}")]
    Server { status: u16, detail: String },
    #[error("The server took too long to respond. Please try again.")]
    Timeout,
    #[error("Network error. Please try again.")]
    Network(#[source] reqwest::Error),
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        ApiError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    pub fn server(status: u16, detail: Option<String>) -> Self {
        let detail = detail.unwrap_or_else(|| format!("Request failed ({status})."));
        ApiError::Server { status, detail }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_falls_back_to_generic_text() {
        let err = ApiError::server(500, None);
        assert_eq!(err.to_string(), "Request failed (500).");

        let err = ApiError::server(409, Some("Email already exists".into()));
        assert_eq!(err.to_string(), "Email already exists");
    }
}
