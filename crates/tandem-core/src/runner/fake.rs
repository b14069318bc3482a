//! Scripted in-memory platforms for poll loop tests.
//!
//! Each status script is replayed one entry per call; the last entry repeats.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use tandem_model::{
    Campaign, CampaignSnapshot, CampaignSpec, CampaignStatus, Condition, HostStatus,
    ObservationMap, RecruiterAction,
};

use crate::{
    client::{HostClient, RecruiterClient},
    error::ClientError,
};

pub fn snapshot(status: CampaignStatus, submissions: u32, places: u32) -> CampaignSnapshot {
    CampaignSnapshot {
        status,
        number_of_submissions: submissions,
        total_available_places: places,
    }
}

fn next<T: Clone>(script: &Mutex<VecDeque<T>>) -> T {
    let mut script = script.lock().unwrap();
    if script.len() > 1 {
        script.pop_front().unwrap()
    } else {
        script.front().cloned().expect("empty script")
    }
}

pub struct ScriptedHost {
    statuses: Mutex<VecDeque<HostStatus>>,
    observations: ObservationMap,
    status_error: Mutex<Option<ClientError>>,
    sent: Mutex<Vec<Vec<Condition>>>,
    time_outs: Mutex<Vec<Duration>>,
    fetches: Mutex<usize>,
}

impl ScriptedHost {
    pub fn new(
        statuses: impl IntoIterator<Item = HostStatus>,
        observations: ObservationMap,
    ) -> Arc<Self> {
        Arc::new(Self {
            statuses: Mutex::new(statuses.into_iter().collect()),
            observations,
            status_error: Mutex::new(None),
            sent: Mutex::default(),
            time_outs: Mutex::default(),
            fetches: Mutex::new(0),
        })
    }

    pub fn failing_status(self: Arc<Self>, err: ClientError) -> Arc<Self> {
        *self.status_error.lock().unwrap() = Some(err);
        self
    }

    pub fn sent(&self) -> Vec<Vec<Condition>> {
        self.sent.lock().unwrap().clone()
    }

    pub fn time_outs(&self) -> Vec<Duration> {
        self.time_outs.lock().unwrap().clone()
    }

    pub fn fetches(&self) -> usize {
        *self.fetches.lock().unwrap()
    }
}

#[async_trait]
impl HostClient for ScriptedHost {
    async fn send_conditions(
        &self,
        _namespace: &str,
        conditions: &[Condition],
    ) -> Result<(), ClientError> {
        self.sent.lock().unwrap().push(conditions.to_vec());
        Ok(())
    }

    async fn host_status(
        &self,
        _namespace: &str,
        time_out: Duration,
    ) -> Result<HostStatus, ClientError> {
        if let Some(err) = self.status_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.time_outs.lock().unwrap().push(time_out);
        Ok(next(&self.statuses))
    }

    async fn fetch_observations(&self, _namespace: &str) -> Result<ObservationMap, ClientError> {
        *self.fetches.lock().unwrap() += 1;
        Ok(self.observations.clone())
    }
}

pub struct ScriptedRecruiter {
    maximum_allowed_time: u64,
    snapshots: Mutex<VecDeque<CampaignSnapshot>>,
    create_error: Mutex<Option<ClientError>>,
    action_error: Mutex<Option<ClientError>>,
    created: Mutex<Vec<CampaignSpec>>,
    actions: Mutex<Vec<RecruiterAction>>,
}

impl ScriptedRecruiter {
    pub fn new(
        maximum_allowed_time: u64,
        snapshots: impl IntoIterator<Item = CampaignSnapshot>,
    ) -> Arc<Self> {
        Arc::new(Self {
            maximum_allowed_time,
            snapshots: Mutex::new(snapshots.into_iter().collect()),
            create_error: Mutex::new(None),
            action_error: Mutex::new(None),
            created: Mutex::default(),
            actions: Mutex::default(),
        })
    }

    pub fn failing_create(self: Arc<Self>, err: ClientError) -> Arc<Self> {
        *self.create_error.lock().unwrap() = Some(err);
        self
    }

    pub fn failing_actions(self: Arc<Self>, err: ClientError) -> Arc<Self> {
        *self.action_error.lock().unwrap() = Some(err);
        self
    }

    pub fn created(&self) -> Vec<CampaignSpec> {
        self.created.lock().unwrap().clone()
    }

    /// Every transition requested, accepted or not.
    pub fn actions(&self) -> Vec<RecruiterAction> {
        self.actions.lock().unwrap().clone()
    }

    fn record(&self, action: RecruiterAction) -> Result<(), ClientError> {
        self.actions.lock().unwrap().push(action);
        match self.action_error.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RecruiterClient for ScriptedRecruiter {
    async fn create_campaign(&self, spec: &CampaignSpec) -> Result<Campaign, ClientError> {
        if let Some(err) = self.create_error.lock().unwrap().clone() {
            return Err(err);
        }
        let mut created = self.created.lock().unwrap();
        created.push(spec.clone());
        Ok(Campaign {
            id: format!("campaign-{}", created.len()),
            maximum_allowed_time: self.maximum_allowed_time,
            total_available_places: spec.total_available_places,
            status: CampaignStatus::Unpublished,
        })
    }

    async fn recruiter_status(&self, _campaign_id: &str) -> Result<CampaignSnapshot, ClientError> {
        Ok(next(&self.snapshots))
    }

    async fn publish(&self, _campaign_id: &str) -> Result<(), ClientError> {
        self.record(RecruiterAction::Publish)
    }

    async fn start(&self, _campaign_id: &str) -> Result<(), ClientError> {
        self.record(RecruiterAction::Start)
    }

    async fn pause(&self, _campaign_id: &str) -> Result<(), ClientError> {
        self.record(RecruiterAction::Pause)
    }
}
