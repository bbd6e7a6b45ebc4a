//! Observer API server for the Nebula galaxy dashboard.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **JSON endpoints** for reading the galaxy (with resources advanced to
//!   the moment of the request) and regenerating it
//! - **Static hosting** for the built browser dashboard and its images
//! - **Minimal HTML status page** (`GET /`) when no dashboard is built
//!
//! All galaxy access goes through the [`GalaxyStore`] held in
//! [`AppState`].
//!
//! [`GalaxyStore`]: nebula_core::GalaxyStore
//! [`AppState`]: state::AppState

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ObserverError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
