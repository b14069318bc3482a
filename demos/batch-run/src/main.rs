use std::sync::Arc;

use anyhow::{Context, bail};
use serde::Deserialize;
use tracing::info;

use tandem_core::{CampaignConfig, RunConfig, host_recruiter_runner, host_runner};
use tandem_host::{HostConfig, HttpHost};
use tandem_model::Condition;
use tandem_observe::{LoggerConfig, logger_init};
use tandem_recruit::{HttpRecruiter, RecruiterConfig};

const HOST_TOKEN_ENV: &str = "TANDEM_HOST_TOKEN";
const RECRUITER_TOKEN_ENV: &str = "TANDEM_RECRUITER_TOKEN";

/// Contents of the run file given on the command line.
#[derive(Debug, Deserialize)]
struct RunFile {
    #[serde(default)]
    run: RunConfig,
    host: HostSection,
    /// Recruit participants when present.
    recruiter: Option<RecruiterSection>,
    conditions: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct HostSection {
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct RecruiterSection {
    endpoint: Option<String>,
    campaign: CampaignConfig,
}

fn token(var: &str) -> anyhow::Result<String> {
    std::env::var(var).with_context(|| format!("{var} is not set"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1) Logger
    logger_init(&LoggerConfig::from_env()?)?;

    // 2) Run file
    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: batch-run <run-file.json>");
    };
    let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let file: RunFile = serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;
    info!(
        path = %path,
        conditions = file.conditions.len(),
        recruiting = file.recruiter.is_some(),
        "run file loaded"
    );

    // 3) Clients + runner
    let host = Arc::new(HttpHost::new(HostConfig::new(
        file.host.endpoint,
        token(HOST_TOKEN_ENV)?,
    ))?);
    let runner = match file.recruiter {
        None => host_runner(file.run, host)?,
        Some(section) => {
            let mut cfg = RecruiterConfig::with_token(token(RECRUITER_TOKEN_ENV)?);
            if let Some(endpoint) = section.endpoint {
                cfg = cfg.endpoint(endpoint);
            }
            let recruiter = Arc::new(HttpRecruiter::new(cfg)?);
            host_recruiter_runner(file.run, section.campaign, host, recruiter)?
        }
    };

    // 4) Run until the batch completes
    let outcome = runner.run_detailed(file.conditions).await?;
    info!(
        ticks = outcome.ticks,
        actions = outcome.actions.len(),
        observations = outcome.observations.len(),
        "run finished"
    );

    println!("{}", serde_json::to_string_pretty(&outcome.observations)?);
    Ok(())
}
