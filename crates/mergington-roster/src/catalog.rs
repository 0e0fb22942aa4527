//! Default activity catalog seeded into the store at process start.
//!
//! The activity set is fixed for the lifetime of the process: nothing here
//! is created or deleted at runtime, only the participant rosters change.
//! Seed participants exist so a fresh instance has realistic data to list.

use std::collections::BTreeMap;

use crate::activity::Activity;

/// Helper to build an [`Activity`] from seed data.
fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(ToString::to_string).collect(),
    }
}

/// Build the default catalog of extracurricular activities.
///
/// Returns the full mapping from activity name to seeded [`Activity`]
/// record. Hard-coded data, so construction is infallible.
pub fn default_catalog() -> BTreeMap<String, Activity> {
    let mut catalog = BTreeMap::new();

    catalog.insert(
        "Basketball".to_string(),
        activity(
            "Team sport focusing on skills, strategy, and fitness",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
            &["alex@mergington.edu"],
        ),
    );

    catalog.insert(
        "Tennis Club".to_string(),
        activity(
            "Develop tennis skills and compete in matches",
            "Tuesdays and Thursdays, 3:30 PM - 5:00 PM",
            10,
            &["sarah@mergington.edu"],
        ),
    );

    catalog.insert(
        "Chess Club".to_string(),
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );

    catalog.insert(
        "Programming Class".to_string(),
        activity(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );

    catalog.insert(
        "Gym Class".to_string(),
        activity(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );

    catalog
}
