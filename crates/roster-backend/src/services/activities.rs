use async_trait::async_trait;
use dashmap::DashMap;

use roster::data::{Activity, Directory};
use roster::errors::ActivityError;
use roster::log;

/// A trait for managing the activity directory and its participants.
///
/// The set of activities is fixed when the service is built; only rosters
/// change afterwards. Implementations may keep the directory in memory or in
/// any other storage, the handlers only depend on this interface.
///
/// # Examples
///
/// ```rust
/// use roster_backend::services::ActivityService;
///
/// async fn example_usage<S: ActivityService>(service: &S) -> Result<(), S::Error> {
///     service.sign_up("Chess Club", "new@mergington.edu").await?;
///     let directory = service.list().await?;
///     println!("{} activities", directory.len());
///     service.unregister("Chess Club", "new@mergington.edu").await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ActivityService {
    /// The error type returned by operations on this service.
    type Error;

    /// Returns every activity, keyed by name.
    async fn list(&self) -> Result<Directory, Self::Error>;

    /// Retrieves a single activity by name.
    ///
    /// # Errors
    ///
    /// Returns an error if no activity exists with the given name.
    async fn get(&self, activity_name: &str) -> Result<Activity, Self::Error>;

    /// Appends `email` to the activity's roster.
    ///
    /// Capacity is not checked, an activity may end up over its
    /// `max_participants`.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist, or if the email is
    /// already on the roster. The activity existence check comes first.
    async fn sign_up(&self, activity_name: &str, email: &str) -> Result<(), Self::Error>;

    /// Removes `email` from the activity's roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist, or if the email is not
    /// on the roster. The activity existence check comes first.
    async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), Self::Error>;
}

/// An in-memory implementation of the `ActivityService` trait.
///
/// Activities live in a `DashMap`. Mutations hold the entry's write guard for
/// the whole check-then-modify step, so concurrent signups of the same email
/// can never both succeed.
///
/// # Examples
/// ```rust
/// use roster_backend::services::*;
///
/// # async fn run() {
/// let service = ActivityServiceInMemory::seeded();
/// service.sign_up("Basketball", "new@mergington.edu").await.unwrap();
///
/// let basketball = service.get("Basketball").await.unwrap();
/// assert!(basketball.has_participant("new@mergington.edu"));
/// # }
/// ```
pub struct ActivityServiceInMemory {
    activities: DashMap<String, Activity>,
}

impl ActivityServiceInMemory {
    /// Builds a service over the given directory.
    pub fn new(directory: Directory) -> Self {
        Self {
            activities: directory.into_iter().collect(),
        }
    }

    /// Builds a service over the fixed startup activities.
    pub fn seeded() -> Self {
        Self::new(super::seed::activities())
    }
}

impl Default for ActivityServiceInMemory {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl ActivityService for ActivityServiceInMemory {
    type Error = ActivityError;

    async fn list(&self) -> Result<Directory, Self::Error> {
        Ok(self
            .activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect())
    }

    async fn get(&self, activity_name: &str) -> Result<Activity, Self::Error> {
        self.activities
            .get(activity_name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ActivityError::ActivityNotFound(activity_name.to_string()))
    }

    async fn sign_up(&self, activity_name: &str, email: &str) -> Result<(), Self::Error> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| ActivityError::ActivityNotFound(activity_name.to_string()))?;

        if !activity.add_participant(email.to_string()) {
            return Err(ActivityError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        if activity.participants.len() > activity.max_participants as usize {
            log::warn!(
                "{} is over capacity: {} participants, max {}",
                activity_name,
                activity.participants.len(),
                activity.max_participants
            );
        }

        log::info!(
            "Signed up {} for {} ({} spots left)",
            email,
            activity_name,
            activity.spots_left()
        );
        Ok(())
    }

    async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), Self::Error> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| ActivityError::ActivityNotFound(activity_name.to_string()))?;

        if !activity.remove_participant(email) {
            return Err(ActivityError::ParticipantNotFound {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        log::info!("Unregistered {} from {}", email, activity_name);
        Ok(())
    }
}
