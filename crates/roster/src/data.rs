//! Data structures shared between the roster service and its clients.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The full set of activities, keyed by activity name.
///
/// A `BTreeMap` keeps listings ordered by name, so two listings of the same
/// state always serialize identically.
pub type Directory = BTreeMap<String, Activity>;

/// A named, signup-able offering with a capacity and a roster of participant emails.
///
/// The activity's name is not stored here; it is the key the activity lives
/// under in a [`Directory`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Capacity ceiling. Informational only, signups are not blocked when it is reached.
    pub max_participants: u32,
    /// Participant emails in signup order.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style helper used when seeding activities with existing participants.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in participants {
            self.add_participant(email.into());
        }
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Appends `email` to the roster.
    ///
    /// Returns `false` and leaves the roster untouched if the email is already present.
    pub fn add_participant(&mut self, email: String) -> bool {
        if self.has_participant(&email) {
            return false;
        }
        self.participants.push(email);
        true
    }

    /// Removes `email` from the roster, keeping the order of everyone else.
    ///
    /// Returns `false` if the email was not on the roster.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(index) => {
                self.participants.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remaining capacity, saturating at zero when the roster is over capacity.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// Query parameters accepted by the signup and unregister endpoints.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ParticipantQuery {
    pub email: String,
}

/// Confirmation body returned by successful mutations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn signed_up(email: &str, activity_name: &str) -> Self {
        Self {
            message: format!("Signed up {email} for {activity_name}"),
        }
    }

    pub fn unregistered(email: &str, activity_name: &str) -> Self {
        Self {
            message: format!("Unregistered {email} from {activity_name}"),
        }
    }
}

/// Body returned alongside every error status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UptimeInfo {
    pub seconds: i64,
    pub human: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceInfo {
    pub activities: String,
    pub activity_count: usize,
    pub participant_count: usize,
}

/// Response body of the health endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub started_at: String,
    pub uptime: UptimeInfo,
    pub services: ServiceInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess() -> Activity {
        Activity::new("Strategy games", "Fridays, 3:30 PM - 5:00 PM", 2)
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"])
    }

    #[test]
    fn serializes_with_camel_case_capacity() {
        let json = serde_json::to_value(chess()).unwrap();

        assert_eq!(json["maxParticipants"], 2);
        assert_eq!(json["participants"][0], "michael@mergington.edu");
        assert!(json.get("max_participants").is_none());
        assert!(json.get("name").is_none());
    }

    #[test]
    fn add_participant_rejects_duplicates() {
        let mut activity = chess();

        assert!(!activity.add_participant("michael@mergington.edu".to_string()));
        assert_eq!(activity.participants.len(), 2);

        assert!(activity.add_participant("new@mergington.edu".to_string()));
        assert_eq!(
            activity.participants.last().map(String::as_str),
            Some("new@mergington.edu")
        );
    }

    #[test]
    fn remove_participant_keeps_order() {
        let mut activity = chess().with_participants(["third@mergington.edu"]);

        assert!(activity.remove_participant("daniel@mergington.edu"));
        assert_eq!(
            activity.participants,
            vec!["michael@mergington.edu", "third@mergington.edu"]
        );

        // Removing again is a no-op
        assert!(!activity.remove_participant("daniel@mergington.edu"));
        assert_eq!(activity.participants.len(), 2);
    }

    #[test]
    fn seeding_deduplicates() {
        let activity = Activity::new("x", "y", 5).with_participants(["a@b.c", "a@b.c"]);
        assert_eq!(activity.participants, vec!["a@b.c"]);
    }

    #[test]
    fn spots_left_saturates() {
        let mut activity = chess();
        assert_eq!(activity.spots_left(), 0);

        activity.add_participant("overflow@mergington.edu".to_string());
        assert_eq!(activity.spots_left(), 0);
    }

    #[test]
    fn message_wording() {
        let signed_up = MessageResponse::signed_up("a@b.c", "Chess Club");
        assert_eq!(signed_up.message, "Signed up a@b.c for Chess Club");

        let unregistered = MessageResponse::unregistered("a@b.c", "Chess Club");
        assert_eq!(unregistered.message, "Unregistered a@b.c from Chess Club");
    }
}
