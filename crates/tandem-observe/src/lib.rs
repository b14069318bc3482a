//! Logging setup shared by the tandem binaries.
//!
//! Libraries in this workspace only emit `tracing` events; installing a
//! subscriber is left to the process entry point via [`logger_init`].

mod logger;
pub use logger::*;
