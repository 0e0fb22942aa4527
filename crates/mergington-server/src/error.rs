//! Error types for the activities API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Domain
//! errors from the roster store pass through with their display strings
//! intact, so clients see the literal email and activity name involved.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mergington_roster::RosterError;

/// Errors that can occur in the activities API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A roster operation failed (unknown activity, duplicate signup,
    /// or unregister of an absent participant).
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Roster(e) => {
                let status = match e {
                    RosterError::ActivityNotFound(_) => StatusCode::NOT_FOUND,
                    RosterError::AlreadyRegistered { .. } | RosterError::NotRegistered { .. } => {
                        StatusCode::BAD_REQUEST
                    }
                };
                (status, e.to_string())
            }
            Self::Serialization(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("JSON error: {e}"))
            }
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from(RosterError::ActivityNotFound("Surfing".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicate_signup_maps_to_400() {
        let err = ApiError::from(RosterError::AlreadyRegistered {
            activity: "Basketball".to_string(),
            email: "alex@mergington.edu".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn absent_unregister_maps_to_400() {
        let err = ApiError::from(RosterError::NotRegistered {
            activity: "Basketball".to_string(),
            email: "ghost@mergington.edu".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
