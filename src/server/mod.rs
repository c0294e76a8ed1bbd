//! Axum-based HTTP server for the conversion service.
//!
//! This module sets up the HTTP server, configures the static route table,
//! and handles incoming requests: parameter extraction, response framing
//! (content type, CORS) and error translation to HTTP status codes. The
//! rendering work itself is delegated to [`crate::convert`].
//!
//! # Components
//!
//! - `handlers`: Implementation of individual endpoints (version, test, and
//!   the seven conversion operations).
//! - `middleware`: CORS/preflight handling and request ID tracking.
//! - `routes`: The main router configuration that ties everything together.

mod handlers;
mod middleware;
mod routes;

pub use routes::{create_router, AppState};
