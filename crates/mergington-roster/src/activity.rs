//! The [`Activity`] record: one extracurricular offering and its roster.
//!
//! Activities are keyed by name in the [`RosterStore`] mapping, so the name
//! lives in the map key rather than in the struct. This mirrors the wire
//! shape: the listing endpoint serializes the store as a JSON object keyed
//! by activity name.
//!
//! [`RosterStore`]: crate::store::RosterStore

use serde::{Deserialize, Serialize};

/// One extracurricular activity and its registered participants.
///
/// The participant roster is an ordered list of unique email strings.
/// Insertion order is preserved: a new signup always lands at the end, and
/// removing one participant never reorders the others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text description of the activity.
    pub description: String,
    /// Free-text meeting days and times.
    pub schedule: String,
    /// Advisory capacity. Serialized and shown to clients but never
    /// enforced at signup time.
    pub max_participants: u32,
    /// Registered participant emails, in signup order, no duplicates.
    pub participants: Vec<String>,
}

impl Activity {
    /// Check whether an email is already on the roster.
    ///
    /// Comparison is case-sensitive and exact; no normalization is applied.
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Return the number of registered participants.
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}
