//! HTTP client for the recruitment platform.
//!
//! Campaigns are "studies" on the platform side:
//! - `POST /api/v1/studies/` creates one from a [`tandem_model::CampaignSpec`]
//! - `GET  /api/v1/studies/{id}/` reads status and counters
//! - `POST /api/v1/studies/{id}/transition/` with `{"action": "PUBLISH" | "START" | "PAUSE"}`

mod client;
pub use client::HttpRecruiter;

mod config;
pub use config::RecruiterConfig;

mod errors;
