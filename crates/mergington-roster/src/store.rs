//! The roster store: all activities keyed by name, plus the two mutations.
//!
//! [`RosterStore`] owns the full activity mapping for the process. The set
//! of activities is fixed at construction (see [`crate::catalog`]); only the
//! participant rosters mutate afterwards, via [`signup`] and [`unregister`].
//!
//! The store is deliberately synchronous and lock-free: the HTTP layer wraps
//! it in a `tokio::sync::RwLock` so each mutation is atomic with respect to
//! the collection, and hands out read access for listings.
//!
//! [`signup`]: RosterStore::signup
//! [`unregister`]: RosterStore::unregister

use std::collections::BTreeMap;

use tracing::debug;

use crate::activity::Activity;
use crate::error::RosterError;

/// In-memory mapping from activity name to [`Activity`] record.
///
/// Failed operations never mutate the store, so repeating a failed call
/// yields the same error each time. Successful mutations touch exactly one
/// roster and preserve the relative order of every other participant.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    /// All activities indexed by their unique name.
    activities: BTreeMap<String, Activity>,
}

impl RosterStore {
    /// Create an empty store.
    pub const fn new() -> Self {
        Self {
            activities: BTreeMap::new(),
        }
    }

    /// Create a store seeded with the given catalog.
    pub const fn with_catalog(activities: BTreeMap<String, Activity>) -> Self {
        Self { activities }
    }

    /// Borrow the full activity mapping.
    pub const fn activities(&self) -> &BTreeMap<String, Activity> {
        &self.activities
    }

    /// Get an immutable reference to one activity by name.
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    /// Return the number of activities in the store.
    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    /// Register an email for an activity.
    ///
    /// Appends the email to the end of the activity's roster, preserving
    /// signup order.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::ActivityNotFound`] if no activity with that
    /// name exists, or [`RosterError::AlreadyRegistered`] if the email is
    /// already on the roster (case-sensitive exact match).
    pub fn signup(&mut self, name: &str, email: &str) -> Result<(), RosterError> {
        let activity = self
            .activities
            .get_mut(name)
            .ok_or_else(|| RosterError::ActivityNotFound(name.to_owned()))?;

        if activity.has_participant(email) {
            return Err(RosterError::AlreadyRegistered {
                activity: name.to_owned(),
                email: email.to_owned(),
            });
        }

        activity.participants.push(email.to_owned());
        debug!(activity = name, email, "participant signed up");
        Ok(())
    }

    /// Remove an email from an activity's roster.
    ///
    /// Removes exactly that email; the relative order of the remaining
    /// participants is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::ActivityNotFound`] if no activity with that
    /// name exists, or [`RosterError::NotRegistered`] if the email is not
    /// on the roster.
    pub fn unregister(&mut self, name: &str, email: &str) -> Result<(), RosterError> {
        let activity = self
            .activities
            .get_mut(name)
            .ok_or_else(|| RosterError::ActivityNotFound(name.to_owned()))?;

        if !activity.has_participant(email) {
            return Err(RosterError::NotRegistered {
                activity: name.to_owned(),
                email: email.to_owned(),
            });
        }

        activity.participants.retain(|p| p != email);
        debug!(activity = name, email, "participant unregistered");
        Ok(())
    }
}
