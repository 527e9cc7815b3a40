//! The activities every fresh directory starts with.

use roster::data::{Activity, Directory};

/// Builds the startup directory.
///
/// Basketball and Chess Club always carry at least one participant.
pub fn activities() -> Directory {
    Directory::from([
        (
            "Chess Club".to_string(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class".to_string(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class".to_string(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball".to_string(),
            Activity::new(
                "Practice drills and play pickup games on the school team",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                15,
            )
            .with_participants(["alex@mergington.edu"]),
        ),
        (
            "Soccer Team".to_string(),
            Activity::new(
                "Train and compete in interschool soccer matches",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                22,
            )
            .with_participants(["liam@mergington.edu"]),
        ),
        (
            "Art Club".to_string(),
            Activity::new(
                "Explore painting, drawing and sculpture",
                "Wednesdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["ava@mergington.edu"]),
        ),
        (
            "Drama Club".to_string(),
            Activity::new(
                "Act, direct and produce school plays",
                "Thursdays, 3:30 PM - 5:30 PM",
                20,
            )
            .with_participants(["mia@mergington.edu", "noah@mergington.edu"]),
        ),
        (
            "Math Olympiad".to_string(),
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(["ethan@mergington.edu"]),
        ),
        (
            "Debate Team".to_string(),
            Activity::new(
                "Build public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            ),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_activities_have_participants() {
        let directory = activities();

        for name in ["Basketball", "Chess Club"] {
            let activity = directory.get(name).unwrap();
            assert!(!activity.participants.is_empty(), "{name} has no participants");
        }
    }

    #[test]
    fn seed_is_within_capacity() {
        for (name, activity) in activities() {
            assert!(activity.max_participants > 0, "{name} has no capacity");
            assert!(
                activity.participants.len() <= activity.max_participants as usize,
                "{name} starts over capacity"
            );
        }
    }
}
