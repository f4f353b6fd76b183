//! # nodewatch-domain
//!
//! Pure domain model for the nodewatch worker-node dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the **Snapshot** (the node's operational metrics as served by `/api/stats`)
//! - Define the **action** vocabulary (`reconnect`, `refresh`) and the notices
//!   shown to the user once an action settles
//! - Define the **display contract**: every render target, its stable DOM
//!   identifier and the kind of value it accepts
//! - Contain the formatting helpers and the pure `render` function
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod action;
pub mod display;
pub mod format;
pub mod locale;
pub mod render;
pub mod snapshot;
