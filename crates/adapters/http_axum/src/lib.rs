//! # nodewatch-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the node's live stats as JSON (`GET /api/stats`)
//! - Expose the dashboard actions (`POST /api/reconnect`, `POST /api/refresh`)
//! - Serve the compiled dashboard (static assets) at `/`
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `nodewatch-app` (for port traits and services) and
//! `nodewatch-domain` (for the wire types). Never leaks axum types into the
//! domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
