//! Simulated GP account — balance plus a daily free quota.

/// Lifetime totals the node starts with.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct History {
    pub total_tasks: u64,
    pub total_gp: f64,
    pub total_size_mib: f64,
    pub today_tasks: u64,
}

/// What the task server would report when asked for the account status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccountStatus {
    pub have_free_quota: bool,
    pub gp_balance: f64,
    pub today_gp_cost: f64,
}

/// An in-memory GP account.
///
/// Task costs draw from the daily free quota first, then from the balance.
#[derive(Debug, Clone)]
pub struct SimulatedAccount {
    gp_balance: f64,
    free_quota_left: f64,
    today_gp_cost: f64,
    history: History,
}

impl Default for SimulatedAccount {
    fn default() -> Self {
        Self::new(250_000.0, 3_000.0)
    }
}

impl SimulatedAccount {
    #[must_use]
    pub fn new(gp_balance: f64, daily_free_quota: f64) -> Self {
        Self {
            gp_balance,
            free_quota_left: daily_free_quota.max(0.0),
            today_gp_cost: 0.0,
            history: History::default(),
        }
    }

    #[must_use]
    pub fn with_history(mut self, history: History) -> Self {
        self.history = history;
        self
    }

    #[must_use]
    pub fn history(&self) -> History {
        self.history
    }

    /// Charge a task's cost to the account.
    pub fn charge(&mut self, gp_cost: f64) {
        let from_quota = gp_cost.min(self.free_quota_left);
        self.free_quota_left -= from_quota;
        self.gp_balance = (self.gp_balance - (gp_cost - from_quota)).max(0.0);
        self.today_gp_cost += gp_cost;
    }

    #[must_use]
    pub fn status(&self) -> AccountStatus {
        AccountStatus {
            have_free_quota: self.free_quota_left > 0.0,
            gp_balance: self.gp_balance,
            today_gp_cost: self.today_gp_cost,
        }
    }
}
