use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use tandem_core::{ClientError, RecruiterClient};
use tandem_model::{Campaign, CampaignSnapshot, CampaignSpec, RecruiterAction};

use crate::config::RecruiterConfig;
use crate::errors::{is_conflict, map_http_status, map_reqwest_error};

/// [`RecruiterClient`] over the platform's REST API.
#[derive(Debug, Clone)]
pub struct HttpRecruiter {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

#[derive(Serialize)]
struct TransitionRequest {
    action: RecruiterAction,
}

impl HttpRecruiter {
    pub fn new(cfg: RecruiterConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(cfg.request_timeout)
            .build()
            .map_err(map_reqwest_error)?;
        Ok(Self {
            http,
            endpoint: cfg.endpoint.trim_end_matches('/').to_string(),
            token: cfg.token,
        })
    }

    fn studies(&self) -> String {
        format!("{}/api/v1/studies/", self.endpoint)
    }

    fn study(&self, id: &str) -> String {
        format!("{}/api/v1/studies/{}/", self.endpoint, id)
    }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(reqwest::header::AUTHORIZATION, format!("Token {}", self.token))
    }

    /// Request `action`; a refused request counts as already applied when
    /// the study reports the action's target status.
    async fn transition(&self, id: &str, action: RecruiterAction) -> Result<(), ClientError> {
        debug!(campaign_id = id, %action, "requesting study transition");
        let response = self
            .authorized(self.http.post(format!("{}transition/", self.study(id))))
            .json(&TransitionRequest { action })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        match check(response).await {
            Ok(_) => Ok(()),
            Err(err) if is_conflict(&err) => {
                let current = self.recruiter_status(id).await?;
                if current.status == action.target_status() {
                    Err(ClientError::AlreadyInState(current.status.to_string()))
                } else {
                    Err(err)
                }
            }
            Err(err) => Err(err),
        }
    }
}

async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(map_http_status(status, &body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let body = check(response).await?.text().await.map_err(map_reqwest_error)?;
    trace!(%body, "recruiter response");
    serde_json::from_str(&body)
        .map_err(|e| ClientError::Decode(format!("{e}, body: {body}")))
}

#[async_trait]
impl RecruiterClient for HttpRecruiter {
    async fn create_campaign(&self, spec: &CampaignSpec) -> Result<Campaign, ClientError> {
        debug!(name = %spec.name, places = spec.total_available_places, "creating study");
        let response = self
            .authorized(self.http.post(self.studies()))
            .json(spec)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode(response).await
    }

    async fn recruiter_status(&self, campaign_id: &str) -> Result<CampaignSnapshot, ClientError> {
        let response = self
            .authorized(self.http.get(self.study(campaign_id)))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let snapshot: CampaignSnapshot = decode(response).await?;
        debug!(
            campaign_id,
            status = %snapshot.status,
            submissions = snapshot.number_of_submissions,
            places = snapshot.total_available_places,
            "study status"
        );
        Ok(snapshot)
    }

    async fn publish(&self, campaign_id: &str) -> Result<(), ClientError> {
        self.transition(campaign_id, RecruiterAction::Publish).await
    }

    async fn start(&self, campaign_id: &str) -> Result<(), ClientError> {
        self.transition(campaign_id, RecruiterAction::Start).await
    }

    async fn pause(&self, campaign_id: &str) -> Result<(), ClientError> {
        self.transition(campaign_id, RecruiterAction::Pause).await
    }
}
