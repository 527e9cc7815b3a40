//! The shared library for Roster, a small activity signup service.
//!
//! This library provides the types shared by the service and its clients,
//! including data structures, error handling and logging.

pub mod data;
pub mod errors;
pub mod log;

pub use serde;
pub use serde_json;
pub use tracing;
