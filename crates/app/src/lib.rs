//! # nodewatch-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `StatsApi` — fetch snapshots, trigger node actions
//!   - `Notifier` — surface action results to the user
//!   - `Scheduler` — spawn tasks and sleep on the host's event loop
//!   - `Clock` — wall-clock time in the viewer's timezone
//!   - `NodeControl` — node-side reconnect / refresh hooks
//! - Drive the dashboard: `StatsStore`, `Poller` (periodic fetch + render),
//!   `ActionInvoker` (reconnect / refresh with follow-up poll)
//! - Provide the node-side services behind `/api/*`: `StatsRecorder`,
//!   `ControlService`
//!
//! ## Execution model
//! The dashboard half runs on a single cooperative timeline (the browser event
//! loop): its ports return futures that need not be `Send`, and shared state
//! lives in `Rc`/`RefCell`. The node half is served by a multi-threaded
//! runtime and is `Send + Sync`.
//!
//! ## Dependency rule
//! Depends on `nodewatch-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod actions;
pub mod config;
pub mod error;
pub mod poller;
pub mod ports;
pub mod services;
pub mod store;

#[cfg(test)]
mod testing;
