//! Stats recorder — the node's live snapshot, fed by its worker loop and
//! served to the dashboard.

use tokio::sync::RwLock;

use nodewatch_domain::snapshot::Snapshot;
use nodewatch_domain::time::{self, Timestamp};

/// Thread-safe holder of the node's current [`Snapshot`].
#[derive(Debug)]
pub struct StatsRecorder {
    stats: RwLock<Snapshot>,
}

impl StatsRecorder {
    /// Start recording for a node that starts now.
    #[must_use]
    pub fn new(node_id: impl Into<String>, server_url: impl Into<String>, max_gp_cost: f64) -> Self {
        Self::started_at(node_id, server_url, max_gp_cost, time::now())
    }

    #[must_use]
    pub fn started_at(
        node_id: impl Into<String>,
        server_url: impl Into<String>,
        max_gp_cost: f64,
        start_time: Timestamp,
    ) -> Self {
        Self {
            stats: RwLock::new(Snapshot::new(node_id, server_url, max_gp_cost, start_time)),
        }
    }

    /// Record a connection change, stamping `connectedSince` or
    /// `lastDisconnect` with the current time.
    #[tracing::instrument(skip(self))]
    pub async fn update_connection_status(&self, connected: bool) {
        let now = time::now();
        let mut stats = self.stats.write().await;
        stats.connected = connected;
        if connected {
            stats.connected_since = Some(now);
        } else {
            stats.last_disconnect = Some(now);
        }
    }

    /// Record a completed task and refresh the per-task averages.
    #[tracing::instrument(skip(self))]
    pub async fn record_task_completed(&self, gp_cost: f64, size_mib: f64) {
        let mut stats = self.stats.write().await;
        stats.tasks_completed += 1;
        stats.today_tasks_completed += 1;
        stats.total_gp_cost += gp_cost;
        stats.total_size_mib += size_mib;
        refresh_averages(&mut stats);
    }

    #[tracing::instrument(skip(self))]
    pub async fn record_task_failed(&self) {
        self.stats.write().await.tasks_failed += 1;
    }

    /// Record the account status reported by the task server.
    #[tracing::instrument(skip(self))]
    pub async fn update_gp_status(&self, have_free_quota: bool, gp_balance: f64, today_gp_cost: f64) {
        let mut stats = self.stats.write().await;
        stats.have_free_quota = have_free_quota;
        stats.gp_balance = gp_balance;
        stats.today_gp_cost = today_gp_cost;
    }

    /// Seed lifetime counters from the node's task history.
    #[tracing::instrument(skip(self))]
    pub async fn load_historical(
        &self,
        total_tasks: u64,
        total_gp: f64,
        total_size_mib: f64,
        today_tasks: u64,
    ) {
        let mut stats = self.stats.write().await;
        stats.tasks_completed = total_tasks;
        stats.total_gp_cost = total_gp;
        stats.total_size_mib = total_size_mib;
        stats.today_tasks_completed = today_tasks;
        refresh_averages(&mut stats);
    }

    /// A copy of the current snapshot.
    pub async fn snapshot(&self) -> Snapshot {
        self.stats.read().await.clone()
    }
}

#[allow(clippy::cast_precision_loss)]
fn refresh_averages(stats: &mut Snapshot) {
    if stats.tasks_completed > 0 {
        let tasks = stats.tasks_completed as f64;
        stats.avg_gp_per_task = stats.total_gp_cost / tasks;
        stats.avg_size_mib = stats.total_size_mib / tasks;
    }
}
