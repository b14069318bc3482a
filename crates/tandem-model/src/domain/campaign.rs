use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{CampaignId, CampaignStatus};

/// Request body for creating a recruitment campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSpec {
    pub name: String,
    pub description: String,
    pub external_study_url: String,
    /// Expected minutes a participant needs.
    pub estimated_completion_time: u32,
    pub total_available_places: u32,
    pub completion_code: String,
}

/// Campaign as returned by the platform on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: CampaignId,
    /// Minutes a participant may take before the platform times them out.
    pub maximum_allowed_time: u64,
    #[serde(default)]
    pub total_available_places: u32,
    #[serde(default = "unpublished")]
    pub status: CampaignStatus,
}

fn unpublished() -> CampaignStatus {
    CampaignStatus::Unpublished
}

impl Campaign {
    /// How long the host keeps a started condition reserved for one participant.
    pub fn host_time_out(&self) -> Duration {
        Duration::from_secs(self.maximum_allowed_time.saturating_mul(60))
    }
}

/// Point-in-time view of a campaign's status and counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSnapshot {
    pub status: CampaignStatus,
    #[serde(default)]
    pub number_of_submissions: u32,
    pub total_available_places: u32,
}

impl CampaignSnapshot {
    /// Every place has a submission.
    pub fn is_filled(&self) -> bool {
        self.number_of_submissions >= self.total_available_places
    }
}
