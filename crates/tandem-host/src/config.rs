use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Base URL of the host API, without a trailing slash.
    pub endpoint: String,
    /// Bearer credentials attached to every request.
    pub credentials: String,
    /// Per-request timeout (default: 30 seconds).
    pub request_timeout: Duration,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080".to_string(),
            credentials: String::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl HostConfig {
    pub fn new(endpoint: impl Into<String>, credentials: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            credentials: credentials.into(),
            ..Default::default()
        }
    }
}
