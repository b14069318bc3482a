//! Domain types shared by the run loop and the platform clients.

mod domain;
pub use domain::*;

mod error;
pub use error::ModelError;
