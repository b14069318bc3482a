//! Maps the statuses of one tick to at most one recruiter transition.

use tandem_model::{CampaignStatus, HostStatus, RecruiterAction, Tick};

/// Corrective action for the given host and campaign status.
///
/// First match wins:
///
/// | host          | campaign      | action    |
/// |---------------|---------------|-----------|
/// | `available`   | `UNPUBLISHED` | `Publish` |
/// | `available`   | `PAUSED`      | `Start`   |
/// | `unavailable` | `STARTED`     | `Pause`   |
///
/// Everything else, including the absence of a campaign, yields `None`.
pub fn reconcile(host: HostStatus, campaign: Option<CampaignStatus>) -> Option<RecruiterAction> {
    match (host, campaign?) {
        (HostStatus::Available, CampaignStatus::Unpublished) => Some(RecruiterAction::Publish),
        (HostStatus::Available, CampaignStatus::Paused) => Some(RecruiterAction::Start),
        (HostStatus::Unavailable, CampaignStatus::Started) => Some(RecruiterAction::Pause),
        _ => None,
    }
}

pub fn reconcile_tick(tick: &Tick) -> Option<RecruiterAction> {
    reconcile(tick.host, tick.campaign.map(|c| c.status))
}
