use std::time::Duration;

/// Runtime configuration, environment-driven with the same defaults the app
/// has always shipped with.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub login_timeout: Duration,
    pub request_timeout: Duration,
    pub poll_interval: Duration,
    /// Run against the in-memory seeded directory instead of the HTTP API.
    pub seed_mode: bool,
}

impl Config {
    pub fn from_env() -> Config {
        Config {
            api_url: std::env::var("API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            login_timeout: Duration::from_millis(env_u64("LOGIN_TIMEOUT_MS", 8_000)),
            request_timeout: Duration::from_millis(env_u64("REQUEST_TIMEOUT_MS", 10_000)),
            poll_interval: Duration::from_millis(env_u64("POLL_MS", 180_000)),
            seed_mode: std::env::var("SEED_MODE")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}
