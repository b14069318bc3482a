use std::time::Duration;

use serde::{Deserialize, Serialize};
use tandem_model::{CampaignSpec, DEFAULT_NAMESPACE, Namespace};

use crate::error::RunError;

/// Settings shared by every run a runner executes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Host namespace conditions and observations live in.
    pub namespace: Namespace,
    /// Slot reservation time passed to the host in host-only runs.
    ///
    /// Runs with a campaign derive it from the campaign instead.
    #[serde(rename = "time_out_secs", with = "secs")]
    pub time_out: Duration,
    /// Pause between two ticks of the poll loop.
    #[serde(rename = "sleep_time_secs", with = "secs")]
    pub sleep_time: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            time_out: Duration::from_secs(100),
            sleep_time: Duration::from_secs(5),
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), RunError> {
        if self.namespace.trim().is_empty() {
            return Err(RunError::InvalidConfig("namespace must not be empty".into()));
        }
        if self.sleep_time.is_zero() {
            return Err(RunError::InvalidConfig("sleep_time must be positive".into()));
        }
        Ok(())
    }
}

/// Campaign metadata for runs that recruit participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignConfig {
    pub name: String,
    pub description: String,
    /// Where participants are sent to take part.
    pub url: String,
    /// Expected minutes per participant.
    pub completion_time_minutes: u32,
    /// Code participants submit back to the platform when done.
    pub completion_code: String,
}

impl CampaignConfig {
    pub fn validate(&self) -> Result<(), RunError> {
        if self.name.trim().is_empty() {
            return Err(RunError::InvalidConfig("campaign name must not be empty".into()));
        }
        if self.url.trim().is_empty() {
            return Err(RunError::InvalidConfig("campaign url must not be empty".into()));
        }
        if self.completion_time_minutes == 0 {
            return Err(RunError::InvalidConfig(
                "campaign completion time must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Creation request sized to a batch of `places` conditions.
    pub fn spec(&self, places: u32) -> CampaignSpec {
        CampaignSpec {
            name: self.name.clone(),
            description: self.description.clone(),
            external_study_url: self.url.clone(),
            estimated_completion_time: self.completion_time_minutes,
            total_available_places: places,
            completion_code: self.completion_code.clone(),
        }
    }
}

mod secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_secs)
    }
}
