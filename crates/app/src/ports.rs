//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod clock;
pub mod node_control;
pub mod notifier;
pub mod scheduler;
pub mod stats_api;

pub use clock::{Clock, LocalClock};
pub use node_control::{NodeControl, Unconfigured};
pub use notifier::Notifier;
pub use scheduler::Scheduler;
pub use stats_api::StatsApi;
