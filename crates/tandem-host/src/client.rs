use std::time::Duration;

use async_trait::async_trait;
use reqwest::Response;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use tandem_core::{ClientError, HostClient};
use tandem_model::{Condition, HostStatus, ObservationMap};

use crate::config::HostConfig;
use crate::errors::{map_http_status, map_reqwest_error};

/// [`HostClient`] over the host's REST API.
#[derive(Debug, Clone)]
pub struct HttpHost {
    http: reqwest::Client,
    endpoint: String,
    credentials: String,
}

#[derive(Serialize)]
struct SendConditionsRequest<'a> {
    conditions: &'a [Condition],
}

#[derive(Deserialize)]
struct StatusResponse {
    status: HostStatus,
}

#[derive(Deserialize)]
struct ObservationsResponse {
    #[serde(default)]
    observations: ObservationMap,
}

impl HttpHost {
    pub fn new(cfg: HostConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(cfg.request_timeout)
            .build()
            .map_err(map_reqwest_error)?;
        Ok(Self {
            http,
            endpoint: cfg.endpoint.trim_end_matches('/').to_string(),
            credentials: cfg.credentials,
        })
    }

    fn url(&self, namespace: &str, resource: &str) -> String {
        format!("{}/v1/namespaces/{}/{}", self.endpoint, namespace, resource)
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
    trace!(%body, "host response");
    serde_json::from_str(&body)
        .map_err(|e| ClientError::Decode(format!("{e}, body: {body}")))
}

#[async_trait]
impl HostClient for HttpHost {
    async fn send_conditions(
        &self,
        namespace: &str,
        conditions: &[Condition],
    ) -> Result<(), ClientError> {
        debug!(namespace, count = conditions.len(), "sending conditions to host");
        let response = self
            .http
            .put(self.url(namespace, "conditions"))
            .bearer_auth(&self.credentials)
            .json(&SendConditionsRequest { conditions })
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check(response).await.map(|_| ())
    }

    async fn host_status(
        &self,
        namespace: &str,
        time_out: Duration,
    ) -> Result<HostStatus, ClientError> {
        let url = format!(
            "{}?time_out_secs={}",
            self.url(namespace, "status"),
            time_out.as_secs()
        );
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.credentials)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let StatusResponse { status } = decode(response).await?;
        debug!(namespace, %status, "host status");
        Ok(status)
    }

    async fn fetch_observations(&self, namespace: &str) -> Result<ObservationMap, ClientError> {
        let response = self
            .http
            .get(self.url(namespace, "observations"))
            .bearer_auth(&self.credentials)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let ObservationsResponse { observations } = decode(response).await?;
        debug!(namespace, count = observations.len(), "observations fetched");
        Ok(observations)
    }
}
