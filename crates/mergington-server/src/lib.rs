//! HTTP API server for the Mergington activities service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`GET /activities`** -- the full activity catalog with rosters
//! - **`POST /activities/{name}/signup`** -- register an email for an
//!   activity
//! - **`DELETE /activities/{name}/unregister`** -- remove an email from an
//!   activity's roster
//! - **`GET /`** -- 307 redirect to the static landing page under
//!   `/static/`
//!
//! # Architecture
//!
//! Handlers operate on a shared [`RosterStore`] behind a
//! `tokio::sync::RwLock` inside [`AppState`]. The store is constructed at
//! startup and injected via Axum's `State` extractor, so tests can build an
//! isolated router around their own seeded store. Listings take the read
//! lock; signup and unregister take the write lock, which serializes
//! mutations and keeps each one atomic with respect to the roster mapping.
//!
//! [`RosterStore`]: mergington_roster::RosterStore
//! [`AppState`]: state::AppState

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
