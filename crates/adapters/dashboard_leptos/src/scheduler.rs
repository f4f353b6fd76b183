//! [`Scheduler`] on the browser event loop.

use std::future::Future;
use std::time::Duration;

use nodewatch_app::ports::Scheduler;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + 'static,
    {
        leptos::task::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + 'static {
        gloo_timers::future::sleep(duration)
    }
}
