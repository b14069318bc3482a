//! Configured runners and the poll loop.
//!
//! A [`Runner`] binds a [`RunConfig`] and the platform clients once; each
//! call to [`Runner::run`] then drives one batch from submission to
//! ordered observations:
//!
//! ```text
//! Submitted --(campaign created)--> Polling --(complete)--> Completed
//!                                    |    ^
//!                                    +----+ tick: read, decide, sleep
//! ```
//!
//! Runs share nothing mutable, so one runner may execute several batches
//! concurrently; every run creates and owns its own campaign.

#[cfg(test)]
mod fake;

use std::{sync::Arc, time::Duration};

use tandem_model::{CampaignId, Condition, Observation, RecruiterAction, Tick};
use tracing::{debug, info, instrument, warn};

use crate::{
    aggregate::into_ordered,
    client::{HostClient, RecruiterClient},
    complete::is_complete,
    config::{CampaignConfig, RunConfig},
    error::{ClientError, RunError},
    reconcile::reconcile_tick,
};

/// Runner that only talks to the experiment host.
///
/// Participants are expected to reach the host by other means; the host's
/// slot reservation time is `config.time_out`.
pub fn host_runner(config: RunConfig, host: Arc<dyn HostClient>) -> Result<Runner, RunError> {
    config.validate()?;
    Ok(Runner {
        config: Arc::new(config),
        host,
        recruitment: None,
    })
}

/// Runner that additionally recruits participants through a campaign sized
/// to each batch, keeping the campaign open only while the host has slots.
pub fn host_recruiter_runner(
    config: RunConfig,
    campaign: CampaignConfig,
    host: Arc<dyn HostClient>,
    recruiter: Arc<dyn RecruiterClient>,
) -> Result<Runner, RunError> {
    config.validate()?;
    campaign.validate()?;
    Ok(Runner {
        config: Arc::new(config),
        host,
        recruitment: Some(Recruitment {
            client: recruiter,
            campaign: Arc::new(campaign),
        }),
    })
}

#[derive(Clone)]
pub struct Runner {
    config: Arc<RunConfig>,
    host: Arc<dyn HostClient>,
    recruitment: Option<Recruitment>,
}

#[derive(Clone)]
struct Recruitment {
    client: Arc<dyn RecruiterClient>,
    campaign: Arc<CampaignConfig>,
}

/// Campaign created for one run.
struct ActiveCampaign<'a> {
    client: &'a dyn RecruiterClient,
    id: CampaignId,
}

/// Per-run state fixed once submission is done.
struct Session<'a> {
    time_out: Duration,
    campaign: Option<ActiveCampaign<'a>>,
}

/// Recruiter transition that the platform accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedAction {
    pub tick: u64,
    pub action: RecruiterAction,
}

/// Result of a run together with what happened along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Observations in sorted key order.
    pub observations: Vec<Observation>,
    /// Poll iterations, including the one that detected completion.
    pub ticks: u64,
    pub actions: Vec<AppliedAction>,
    pub campaign_id: Option<CampaignId>,
}

impl Runner {
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn recruits(&self) -> bool {
        self.recruitment.is_some()
    }

    /// Run one batch and return its observations in sorted key order.
    pub async fn run(&self, conditions: Vec<Condition>) -> Result<Vec<Observation>, RunError> {
        self.run_detailed(conditions).await.map(|o| o.observations)
    }

    /// Like [`Runner::run`], also reporting tick count and applied actions.
    ///
    /// The loop has no deadline. Dropping the future abandons the run and
    /// leaves submitted conditions and any open campaign on the platforms.
    #[instrument(
        level = "info",
        skip(self, conditions),
        fields(namespace = %self.config.namespace, batch = conditions.len(), recruiting = self.recruits())
    )]
    pub async fn run_detailed(&self, conditions: Vec<Condition>) -> Result<RunOutcome, RunError> {
        if conditions.is_empty() {
            return Err(RunError::InvalidConfig("batch has no conditions".into()));
        }
        let places = u32::try_from(conditions.len())
            .map_err(|_| RunError::InvalidConfig("batch exceeds campaign place limit".into()))?;
        let expected = conditions.len();
        let namespace = self.config.namespace.as_str();

        self.host
            .send_conditions(namespace, &conditions)
            .await
            .map_err(RunError::from_host)?;
        info!("conditions submitted to host");

        let session = self.open_session(places).await?;
        let campaign_id = session.campaign.as_ref().map(|c| c.id.clone());

        let mut actions = Vec::new();
        let mut index: u64 = 0;
        loop {
            let tick = self.read_tick(index, &session).await?;
            debug!(
                tick = tick.index,
                host_status = %tick.host,
                campaign_status = tick.campaign.map(|c| c.status.as_str()),
                submissions = tick.campaign.map(|c| c.number_of_submissions),
                "tick snapshot"
            );

            if is_complete(&tick) {
                break;
            }
            if let (Some(action), Some(campaign)) = (reconcile_tick(&tick), &session.campaign)
                && apply(campaign, action).await?
            {
                actions.push(AppliedAction {
                    tick: index,
                    action,
                });
            }

            index += 1;
            tokio::time::sleep(self.config.sleep_time).await;
        }
        let ticks = index + 1;
        info!(ticks, "batch complete, fetching observations");

        let observations = self
            .host
            .fetch_observations(namespace)
            .await
            .map_err(RunError::from_host)?;
        if observations.len() != expected {
            return Err(RunError::InconsistentState {
                expected,
                actual: observations.len(),
            });
        }

        Ok(RunOutcome {
            observations: into_ordered(observations),
            ticks,
            actions,
            campaign_id,
        })
    }

    async fn open_session(&self, places: u32) -> Result<Session<'_>, RunError> {
        let Some(recruitment) = &self.recruitment else {
            return Ok(Session {
                time_out: self.config.time_out,
                campaign: None,
            });
        };

        let created = recruitment
            .client
            .create_campaign(&recruitment.campaign.spec(places))
            .await
            .map_err(RunError::from_recruiter)?;
        let time_out = created.host_time_out();
        info!(
            campaign_id = %created.id,
            places,
            time_out_secs = time_out.as_secs(),
            "campaign created"
        );

        Ok(Session {
            time_out,
            campaign: Some(ActiveCampaign {
                client: recruitment.client.as_ref(),
                id: created.id,
            }),
        })
    }

    /// Host status, then campaign status when recruiting.
    async fn read_tick(&self, index: u64, session: &Session<'_>) -> Result<Tick, RunError> {
        let host = self
            .host
            .host_status(&self.config.namespace, session.time_out)
            .await
            .map_err(RunError::from_host)?;

        match &session.campaign {
            None => Ok(Tick::host_only(index, host)),
            Some(campaign) => {
                let snapshot = campaign
                    .client
                    .recruiter_status(&campaign.id)
                    .await
                    .map_err(RunError::from_recruiter)?;
                Ok(Tick::combined(index, host, snapshot))
            }
        }
    }
}

/// Returns whether the platform accepted the transition.
async fn apply(campaign: &ActiveCampaign<'_>, action: RecruiterAction) -> Result<bool, RunError> {
    match campaign.client.apply(&campaign.id, action).await {
        Ok(()) => {
            info!(campaign_id = %campaign.id, %action, "campaign transition applied");
            Ok(true)
        }
        Err(ClientError::AlreadyInState(reason)) => {
            warn!(campaign_id = %campaign.id, %action, %reason, "campaign transition skipped");
            Ok(false)
        }
        Err(err) => Err(RunError::from_recruiter(err)),
    }
}
