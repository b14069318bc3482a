use serde::{Deserialize, Serialize};

use super::{CampaignSnapshot, HostStatus};

/// Statuses read from both platforms during one poll iteration.
///
/// Decisions for a tick are taken from this value alone, so host and
/// recruiter reads from different iterations are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
    pub index: u64,
    pub host: HostStatus,
    /// `None` in host-only runs.
    pub campaign: Option<CampaignSnapshot>,
}

impl Tick {
    pub fn host_only(index: u64, host: HostStatus) -> Self {
        Self {
            index,
            host,
            campaign: None,
        }
    }

    pub fn combined(index: u64, host: HostStatus, campaign: CampaignSnapshot) -> Self {
        Self {
            index,
            host,
            campaign: Some(campaign),
        }
    }
}
