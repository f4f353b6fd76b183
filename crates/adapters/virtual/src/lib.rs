//! # nodewatch-adapter-virtual
//!
//! Virtual/demo node used when no real task server is attached. It keeps the
//! node's [`StatsRecorder`](nodewatch_app::services::stats_recorder::StatsRecorder)
//! moving so the dashboard has something to show.
//!
//! ## Provided pieces
//!
//! | Piece | Behaviour |
//! |-------|-----------|
//! | [`VirtualNode`] | Implements `NodeControl`: reconnect cycles the connection, refresh re-reads the account |
//! | [`SimulatedAccount`] | GP balance with a daily free quota, charged per task |
//! | [`TaskSimulator`] | Completes (and occasionally fails) one task per interval |
//!
//! ## Dependency rule
//!
//! Depends on `nodewatch-app` (port traits and services) only.

mod account;
mod node;
mod simulator;

pub use account::{AccountStatus, History, SimulatedAccount};
pub use node::VirtualNode;
pub use simulator::{SimulatedTask, TaskSimulator};
