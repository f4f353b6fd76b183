//! Virtual node — answers the dashboard's control requests.

use std::sync::Arc;

use tokio::sync::Mutex;

use nodewatch_app::error::ControlError;
use nodewatch_app::ports::NodeControl;
use nodewatch_app::services::stats_recorder::StatsRecorder;

use crate::account::SimulatedAccount;

/// A simulated worker node feeding a shared [`StatsRecorder`].
pub struct VirtualNode {
    recorder: Arc<StatsRecorder>,
    account: Mutex<SimulatedAccount>,
}

impl VirtualNode {
    pub fn new(recorder: Arc<StatsRecorder>, account: SimulatedAccount) -> Self {
        Self {
            recorder,
            account: Mutex::new(account),
        }
    }

    pub fn recorder(&self) -> &Arc<StatsRecorder> {
        &self.recorder
    }

    /// Load the account history, connect and publish the account status.
    pub async fn start(&self) {
        let history = self.account.lock().await.history();
        self.recorder
            .load_historical(
                history.total_tasks,
                history.total_gp,
                history.total_size_mib,
                history.today_tasks,
            )
            .await;
        self.recorder.update_connection_status(true).await;
        self.publish_status().await;
        tracing::info!(tasks = history.total_tasks, "virtual node started");
    }

    /// Record one finished task, charging its cost when it succeeded.
    pub async fn finish_task(&self, gp_cost: f64, size_mib: f64, failed: bool) {
        if failed {
            self.recorder.record_task_failed().await;
            return;
        }
        self.account.lock().await.charge(gp_cost);
        self.recorder.record_task_completed(gp_cost, size_mib).await;
        self.publish_status().await;
    }

    async fn publish_status(&self) {
        let status = self.account.lock().await.status();
        self.recorder
            .update_gp_status(status.have_free_quota, status.gp_balance, status.today_gp_cost)
            .await;
    }
}

impl NodeControl for VirtualNode {
    async fn reconnect(&self) -> Result<(), ControlError> {
        self.recorder.update_connection_status(false).await;
        self.recorder.update_connection_status(true).await;
        tracing::info!("virtual node reconnected");
        Ok(())
    }

    async fn refresh_status(&self) -> Result<(), ControlError> {
        self.publish_status().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::History;

    fn node(account: SimulatedAccount) -> VirtualNode {
        VirtualNode::new(
            Arc::new(StatsRecorder::new("virtual-node", "wss://hub.local", 5000.0)),
            account,
        )
    }

    #[tokio::test]
    async fn should_connect_and_load_history_on_start() {
        let node = node(SimulatedAccount::default().with_history(History {
            total_tasks: 40,
            total_gp: 8_000.0,
            total_size_mib: 2_048.0,
            today_tasks: 3,
        }));

        node.start().await;

        let stats = node.recorder().snapshot().await;
        assert!(stats.connected);
        assert!(stats.connected_since.is_some());
        assert_eq!(stats.tasks_completed, 40);
        assert_eq!(stats.today_tasks_completed, 3);
        assert!((stats.avg_gp_per_task - 200.0).abs() < f64::EPSILON);
        assert!(stats.have_free_quota);
        assert!((stats.gp_balance - 250_000.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_cycle_connection_on_reconnect() {
        let node = node(SimulatedAccount::default());

        node.reconnect().await.unwrap();

        let stats = node.recorder().snapshot().await;
        assert!(stats.connected);
        assert!(stats.last_disconnect.is_some());
        assert!(stats.connected_since.is_some());
    }

    #[tokio::test]
    async fn should_charge_completed_tasks_and_publish_status() {
        let node = node(SimulatedAccount::new(1_000.0, 0.0));

        node.finish_task(150.0, 32.0, false).await;
        node.finish_task(99.0, 1.0, true).await;

        let stats = node.recorder().snapshot().await;
        assert_eq!(stats.tasks_completed, 1);
        assert_eq!(stats.tasks_failed, 1);
        assert!((stats.gp_balance - 850.0).abs() < f64::EPSILON);
        assert!((stats.today_gp_cost - 150.0).abs() < f64::EPSILON);
        assert!(!stats.have_free_quota);
    }

    #[tokio::test]
    async fn should_publish_account_on_refresh() {
        let node = node(SimulatedAccount::new(42.0, 10.0));

        node.refresh_status().await.unwrap();

        let stats = node.recorder().snapshot().await;
        assert!((stats.gp_balance - 42.0).abs() < f64::EPSILON);
        assert!(stats.have_free_quota);
    }
}
