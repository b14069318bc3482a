use std::fmt;

use thiserror::Error;

/// Failure reported by a platform client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("authentication rejected: {0}")]
    Auth(String),

    #[error("request rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    /// A transition was refused because the campaign already has its target status.
    #[error("already in target state: {0}")]
    AlreadyInState(String),
}

impl ClientError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ClientError::Auth(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Host,
    Recruiter,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Host => f.write_str("experiment host"),
            Platform::Recruiter => f.write_str("recruitment platform"),
        }
    }
}

/// Failure of a whole run, as seen by the caller.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("could not reach experiment host: {0}")]
    HostUnreachable(#[source] ClientError),

    #[error("could not reach recruitment platform: {0}")]
    RecruiterUnreachable(#[source] ClientError),

    #[error("{platform} rejected credentials: {reason}")]
    AuthRejected { platform: Platform, reason: String },

    #[error("host returned {actual} observations for {expected} conditions")]
    InconsistentState { expected: usize, actual: usize },

    #[error("invalid run configuration: {0}")]
    InvalidConfig(String),
}

impl RunError {
    pub fn from_host(err: ClientError) -> Self {
        Self::classify(Platform::Host, err)
    }

    pub fn from_recruiter(err: ClientError) -> Self {
        Self::classify(Platform::Recruiter, err)
    }

    fn classify(platform: Platform, err: ClientError) -> Self {
        match (platform, err) {
            (platform, ClientError::Auth(reason)) => RunError::AuthRejected { platform, reason },
            (Platform::Host, err) => RunError::HostUnreachable(err),
            (Platform::Recruiter, err) => RunError::RecruiterUnreachable(err),
        }
    }

    /// Resubmitting cannot succeed until credentials change.
    pub fn is_auth(&self) -> bool {
        matches!(self, RunError::AuthRejected { .. })
    }

    pub fn platform(&self) -> Option<Platform> {
        match self {
            RunError::HostUnreachable(_) => Some(Platform::Host),
            RunError::RecruiterUnreachable(_) => Some(Platform::Recruiter),
            RunError::AuthRejected { platform, .. } => Some(*platform),
            RunError::InconsistentState { .. } | RunError::InvalidConfig(_) => None,
        }
    }
}
