use std::time::Duration;

use reqwest::{Response, StatusCode};

use crate::config::Config;
use crate::dtos::auth::{LoginRequest, UserPublic};
use crate::dtos::error::ErrorBody;
use crate::dtos::roster::{StatusUpdateRequest, UserNameStatus, UsersNameStatusList};
use crate::error::ApiError;
use crate::models::status::Status;

/// Thin client over the status board HTTP API. The backend session is a
/// cookie, so the client keeps a cookie store for its whole lifetime.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    login_timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<ApiClient, ApiError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout)
            .build()?;
        Ok(ApiClient {
            http,
            base: config.api_url.trim_end_matches('/').to_string(),
            login_timeout: config.login_timeout,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<UserPublic, ApiError> {
        tracing::debug!(%email, "login request");
        let res = self
            .http
            .post(self.url("/auth/login"))
            .timeout(self.login_timeout)
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        if res.status().is_success() {
            return Ok(res.json().await?);
        }
        let status = res.status();
        let detail = read_detail(res).await;
        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND => ApiError::InvalidCredentials,
            StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::validation(detail.unwrap_or_else(|| "Invalid login details.".into()))
            }
            _ => ApiError::server(status.as_u16(), detail),
        })
    }

    /// Server-side session invalidation; failures are ignored by design of
    /// the caller, which has already dropped its local session.
    pub async fn logout(&self) {
        if let Err(err) = self.http.post(self.url("/auth/logout")).send().await {
            tracing::debug!(error = %err, "logout request failed");
        }
    }

    pub async fn roster(&self) -> Result<Vec<UserNameStatus>, ApiError> {
        let res = self
            .http
            .get(self.url("/users/list_users_with_statuses"))
            .send()
            .await?;
        if res.status().is_success() {
            let list: UsersNameStatusList = res.json().await?;
            return Ok(list.users);
        }
        Err(classify(res).await)
    }

    pub async fn user_status(&self, user_id: i64) -> Result<UserNameStatus, ApiError> {
        let res = self
            .http
            .get(self.url("/users/get_user_status"))
            .query(&[("user_id", user_id)])
            .send()
            .await?;
        if res.status().is_success() {
            return Ok(res.json().await?);
        }
        Err(classify(res).await)
    }

    pub async fn update_status(&self, user_id: i64, status: Status) -> Result<(), ApiError> {
        tracing::debug!(user_id, status = status.canonical(), "status update");
        let res = self
            .http
            .put(self.url("/user_statuses/update_user_status"))
            .query(&[("user_id", user_id)])
            .json(&StatusUpdateRequest {
                status: status.canonical(),
            })
            .send()
            .await?;
        if res.status().is_success() {
            return Ok(());
        }
        Err(classify(res).await)
    }
}

/// Map a non-2xx response from an authenticated endpoint to an error
/// category. Login has its own mapping because 401 means bad credentials
/// there, not an expired session.
async fn classify(res: Response) -> ApiError {
    let status = res.status();
    let detail = read_detail(res).await;
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::SessionExpired,
        StatusCode::NOT_FOUND => {
            ApiError::not_found(detail.unwrap_or_else(|| "Not found.".into()))
        }
        StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::validation(detail.unwrap_or_else(|| "Invalid request.".into()))
        }
        _ => ApiError::server(status.as_u16(), detail),
    }
}

async fn read_detail(res: Response) -> Option<String> {
    res.json::<ErrorBody>().await.ok().map(|b| b.detail.message())
}
