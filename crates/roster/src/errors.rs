//! Shared error types and utilities for the roster project.
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// How an [`ActivityError`] should be reported to a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    BadRequest,
}

/// Failures of the activity directory operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivityError {
    #[error("Activity {0} not found")]
    ActivityNotFound(String),
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },
    #[error("Participant {email} not found in {activity}")]
    ParticipantNotFound { activity: String, email: String },
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl ActivityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ActivityNotFound(_) | Self::ParticipantNotFound { .. } => ErrorKind::NotFound,
            Self::AlreadySignedUp { .. } | Self::InvalidQuery(_) => ErrorKind::BadRequest,
        }
    }
}
