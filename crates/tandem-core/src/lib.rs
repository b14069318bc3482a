//! Run loop coordinating an experiment host with a recruitment platform.
//!
//! Modules:
//! - [`client`]: the narrow interfaces both platforms are accessed through.
//! - [`reconcile`]: per-tick corrective action for the recruiter.
//! - [`complete`]: batch completion check.
//! - [`aggregate`]: deterministic ordering of fetched observations.
//! - [`runner`]: configured runners and the poll loop.

pub mod aggregate;
pub mod client;
pub mod complete;
pub mod config;
pub mod error;
pub mod reconcile;
pub mod runner;

pub use aggregate::{aggregate, into_ordered};
pub use client::{HostClient, RecruiterClient};
pub use complete::is_complete;
pub use config::{CampaignConfig, RunConfig};
pub use error::{ClientError, Platform, RunError};
pub use reconcile::{reconcile, reconcile_tick};
pub use runner::{AppliedAction, RunOutcome, Runner, host_recruiter_runner, host_runner};
