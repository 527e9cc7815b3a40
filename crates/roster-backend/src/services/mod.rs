//! Backend services for activity and participant management.
//!
//! This module provides the service layer abstraction for the activity
//! directory and an in-memory implementation seeded with the startup
//! activities.

pub mod activities;
pub mod seed;

pub use activities::*;
