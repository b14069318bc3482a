mod payload;
pub use payload::{Condition, Observation, ObservationMap};

mod host_status;
pub use host_status::HostStatus;

mod campaign_status;
pub use campaign_status::CampaignStatus;

mod campaign;
pub use campaign::{Campaign, CampaignSnapshot, CampaignSpec};

mod action;
pub use action::RecruiterAction;

mod tick;
pub use tick::Tick;

/// Host-side grouping of conditions and observations.
///
/// Every host call is scoped to one namespace.
pub type Namespace = String;

/// Identifier the recruitment platform assigns to a campaign.
pub type CampaignId = String;

/// Default namespace used when the caller does not pick one.
pub const DEFAULT_NAMESPACE: &str = "autora";
