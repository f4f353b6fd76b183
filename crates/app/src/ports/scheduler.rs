//! Scheduler port — task spawning and timers on the host event loop.

use std::future::Future;
use std::time::Duration;

/// Spawns local tasks and provides timers.
///
/// Spawned tasks run to completion independently of the spawner; nothing is
/// ever awaited on their behalf.
pub trait Scheduler {
    /// Run `task` on the current thread's event loop.
    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + 'static;

    /// A future that resolves once `duration` has elapsed.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + 'static;
}
