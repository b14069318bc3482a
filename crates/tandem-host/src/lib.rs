//! HTTP client for the experiment host.
//!
//! Routes, relative to the configured endpoint:
//! - `PUT  /v1/namespaces/{ns}/conditions` with `{"conditions": [...]}`
//! - `GET  /v1/namespaces/{ns}/status?time_out_secs=N` returning `{"status": "..."}`
//! - `GET  /v1/namespaces/{ns}/observations` returning `{"observations": {...}}`

mod client;
pub use client::HttpHost;

mod config;
pub use config::HostConfig;

mod errors;
