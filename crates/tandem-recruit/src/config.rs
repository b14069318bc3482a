use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RecruiterConfig {
    /// Base URL of the platform API (default: `https://api.prolific.com`).
    pub endpoint: String,
    /// API token, sent as `Authorization: Token <token>`.
    pub token: String,
    /// Per-request timeout (default: 30 seconds).
    pub request_timeout: Duration,
}

impl Default for RecruiterConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.prolific.com".to_string(),
            token: String::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl RecruiterConfig {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}
