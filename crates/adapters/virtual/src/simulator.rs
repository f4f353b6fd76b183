//! Task simulator — drives a [`VirtualNode`] on a fixed interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{MissedTickBehavior, interval};

use crate::node::VirtualNode;

/// Every n-th simulated task fails.
const FAILURE_EVERY: u64 = 7;

/// Outcome of one simulated task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedTask {
    pub gp_cost: f64,
    pub size_mib: f64,
    pub failed: bool,
}

impl SimulatedTask {
    /// The `n`-th task (1-based). Deterministic so runs are reproducible.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn nth(n: u64) -> Self {
        Self {
            gp_cost: (40 + (n * 37) % 220) as f64,
            size_mib: (8 + (n * 53) % 480) as f64 + 0.5,
            failed: n % FAILURE_EVERY == 0,
        }
    }
}

/// Completes one simulated task per tick until shut down.
pub struct TaskSimulator {
    node: Arc<VirtualNode>,
    every: Duration,
    count: u64,
}

impl TaskSimulator {
    pub fn new(node: Arc<VirtualNode>, every: Duration) -> Self {
        Self {
            node,
            every,
            count: 0,
        }
    }

    /// Run the next simulated task.
    pub async fn step(&mut self) -> SimulatedTask {
        self.count += 1;
        let task = SimulatedTask::nth(self.count);
        tracing::debug!(
            task = self.count,
            gp = task.gp_cost,
            failed = task.failed,
            "simulated task finished"
        );
        self.node
            .finish_task(task.gp_cost, task.size_mib, task.failed)
            .await;
        task
    }

    /// Step once per interval until `shutdown` flips to `true` or its sender
    /// is dropped.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = interval(self.every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            tokio::select! {
                biased;
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    self.step().await;
                }
            }
        }
        tracing::debug!(tasks = self.count, "task simulator stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::SimulatedAccount;
    use nodewatch_app::services::stats_recorder::StatsRecorder;

    fn node() -> Arc<VirtualNode> {
        Arc::new(VirtualNode::new(
            Arc::new(StatsRecorder::new("virtual-node", "wss://hub.local", 5000.0)),
            SimulatedAccount::default(),
        ))
    }

    #[test]
    fn should_fail_every_seventh_task() {
        let failed: Vec<u64> = (1..=21).filter(|n| SimulatedTask::nth(*n).failed).collect();
        assert_eq!(failed, vec![7, 14, 21]);
    }

    #[tokio::test]
    async fn should_record_steps_on_node() {
        let node = node();
        let mut simulator = TaskSimulator::new(Arc::clone(&node), Duration::from_secs(1));

        for _ in 0..7 {
            simulator.step().await;
        }

        let stats = node.recorder().snapshot().await;
        assert_eq!(stats.tasks_completed, 6);
        assert_eq!(stats.tasks_failed, 1);
        assert!(stats.total_gp_cost > 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn should_step_on_interval_until_shutdown() {
        let node = node();
        let (stop, stopped) = watch::channel(false);
        let simulator = TaskSimulator::new(Arc::clone(&node), Duration::from_secs(2));
        let handle = tokio::spawn(simulator.run(stopped));

        tokio::time::sleep(Duration::from_millis(4_500)).await;
        assert_eq!(node.recorder().snapshot().await.tasks_completed, 2);

        stop.send_replace(true);
        handle.await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(node.recorder().snapshot().await.tasks_completed, 2);
    }
}
