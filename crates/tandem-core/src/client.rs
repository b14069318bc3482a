use std::time::Duration;

use async_trait::async_trait;
use tandem_model::{
    Campaign, CampaignSnapshot, CampaignSpec, Condition, HostStatus, ObservationMap,
    RecruiterAction,
};

use crate::error::ClientError;

/// Experiment host: stores conditions and the observations they produce.
///
/// Credentials are bound when the client is built and sent with every call.
#[async_trait]
pub trait HostClient: Send + Sync + 'static {
    /// Replace the namespace's pending conditions with `conditions`.
    async fn send_conditions(
        &self,
        namespace: &str,
        conditions: &[Condition],
    ) -> Result<(), ClientError>;

    /// Current availability. Conditions started more than `time_out` ago
    /// without an observation are released by the host.
    async fn host_status(
        &self,
        namespace: &str,
        time_out: Duration,
    ) -> Result<HostStatus, ClientError>;

    /// All observations recorded in the namespace.
    async fn fetch_observations(&self, namespace: &str) -> Result<ObservationMap, ClientError>;
}

/// Recruitment platform: owns a campaign's publish/start/pause lifecycle.
#[async_trait]
pub trait RecruiterClient: Send + Sync + 'static {
    async fn create_campaign(&self, spec: &CampaignSpec) -> Result<Campaign, ClientError>;

    async fn recruiter_status(&self, campaign_id: &str) -> Result<CampaignSnapshot, ClientError>;

    async fn publish(&self, campaign_id: &str) -> Result<(), ClientError>;

    async fn start(&self, campaign_id: &str) -> Result<(), ClientError>;

    async fn pause(&self, campaign_id: &str) -> Result<(), ClientError>;

    async fn apply(&self, campaign_id: &str, action: RecruiterAction) -> Result<(), ClientError> {
        match action {
            RecruiterAction::Publish => self.publish(campaign_id).await,
            RecruiterAction::Start => self.start(campaign_id).await,
            RecruiterAction::Pause => self.pause(campaign_id).await,
        }
    }
}
