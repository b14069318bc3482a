use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown host status: {0}")]
    UnknownHostStatus(String),
    #[error("unknown recruiter action: {0}")]
    UnknownAction(String),
}
