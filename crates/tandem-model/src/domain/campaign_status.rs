use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a recruitment campaign.
///
/// Only the first three states drive reconciliation; the rest are carried
/// so that snapshots from the platform always decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    /// Created but never published.
    Unpublished,
    /// Published and recruiting was halted.
    Paused,
    /// Visible to participants and recruiting.
    #[serde(alias = "ACTIVE")]
    Started,
    /// Closed by the platform, e.g. all places filled and reviewed.
    #[serde(alias = "AWAITING REVIEW", alias = "AWAITING_REVIEW")]
    Completed,
    /// Transitional or platform-specific state the loop does not act on.
    #[serde(other)]
    Other,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Unpublished => "UNPUBLISHED",
            CampaignStatus::Paused => "PAUSED",
            CampaignStatus::Started => "STARTED",
            CampaignStatus::Completed => "COMPLETED",
            CampaignStatus::Other => "OTHER",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
