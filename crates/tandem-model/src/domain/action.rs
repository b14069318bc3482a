use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::CampaignStatus;
use crate::error::ModelError;

/// Corrective transition issued to the recruitment platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecruiterAction {
    Publish,
    Start,
    Pause,
}

impl RecruiterAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecruiterAction::Publish => "PUBLISH",
            RecruiterAction::Start => "START",
            RecruiterAction::Pause => "PAUSE",
        }
    }

    /// Campaign status the platform reports once the transition took effect.
    pub fn target_status(&self) -> CampaignStatus {
        match self {
            RecruiterAction::Publish | RecruiterAction::Start => CampaignStatus::Started,
            RecruiterAction::Pause => CampaignStatus::Paused,
        }
    }
}

impl fmt::Display for RecruiterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecruiterAction {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PUBLISH" => Ok(RecruiterAction::Publish),
            "START" => Ok(RecruiterAction::Start),
            "PAUSE" => Ok(RecruiterAction::Pause),
            _ => Err(ModelError::UnknownAction(s.to_string())),
        }
    }
}
