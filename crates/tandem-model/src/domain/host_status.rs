use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Availability reported by the experiment host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostStatus {
    /// No open slot for a new participant.
    Unavailable,
    /// At least one condition is waiting for a participant.
    Available,
    /// Every submitted condition has produced an observation.
    Finished,
}

impl HostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostStatus::Unavailable => "unavailable",
            HostStatus::Available => "available",
            HostStatus::Finished => "finished",
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, HostStatus::Finished)
    }
}

impl fmt::Display for HostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "unavailable" => Ok(HostStatus::Unavailable),
            "available" => Ok(HostStatus::Available),
            "finished" => Ok(HostStatus::Finished),
            other => Err(ModelError::UnknownHostStatus(other.to_string())),
        }
    }
}
