//! REST API endpoint handlers for the activities server.
//!
//! All handlers operate on the shared [`RosterStore`] via [`AppState`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/activities` | Full activity mapping with rosters |
//! | `POST` | `/activities/{name}/signup` | Register an email |
//! | `DELETE` | `/activities/{name}/unregister` | Remove an email |
//!
//! Signup and unregister take the participant email as a required `email`
//! query parameter; a missing or malformed query is rejected by the
//! extractor with a 400 before the handler runs.
//!
//! [`RosterStore`]: mergington_roster::RosterStore

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters shared by the signup and unregister endpoints.
#[derive(Debug, serde::Deserialize)]
pub struct ParticipantQuery {
    /// The participant's email address.
    pub email: String,
}

/// Return the full activity mapping: name to description, schedule,
/// advisory capacity, and the ordered participant roster.
pub async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.read().await;
    Ok(Json(serde_json::to_value(store.activities())?))
}

/// Register an email for an activity.
///
/// Appends the email to the end of the activity's roster and confirms with
/// a message naming both the email and the activity.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<ParticipantQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    store.signup(&name, &params.email)?;

    info!(activity = %name, email = %params.email, "signup accepted");

    Ok(Json(serde_json::json!({
        "message": format!("Signed up {} for {}", params.email, name),
    })))
}

/// Remove an email from an activity's roster.
///
/// Confirms with a message naming both the email and the activity.
pub async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<ParticipantQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    store.unregister(&name, &params.email)?;

    info!(activity = %name, email = %params.email, "unregister accepted");

    Ok(Json(serde_json::json!({
        "message": format!("Unregistered {} from {}", params.email, name),
    })))
}
