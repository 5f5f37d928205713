//! Studiorec API library
//!
//! The axum application: state, HTTP error conversion, the ingest service,
//! handlers, and setup. Exposed as a library so integration tests can build
//! the router with injected collaborators.

pub mod api_doc;
pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;
