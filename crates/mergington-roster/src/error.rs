//! Error types for the `mergington-roster` crate.
//!
//! All fallible operations in this crate return [`RosterError`] through the
//! standard [`Result`] type alias. The display strings are user-facing: the
//! HTTP layer forwards them verbatim in error response bodies.

/// Errors that can occur during roster operations.
///
/// All three variants are expected, user-facing failures. None is fatal and
/// none mutates the store: a failed signup or unregister leaves every roster
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// No activity with the given name exists in the store.
    #[error("activity not found: {0}")]
    ActivityNotFound(String),

    /// The email is already on the activity's roster.
    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered {
        /// The activity name.
        activity: String,
        /// The duplicate email.
        email: String,
    },

    /// The email is not on the activity's roster.
    #[error("{email} is not signed up for {activity}")]
    NotRegistered {
        /// The activity name.
        activity: String,
        /// The absent email.
        email: String,
    },
}
