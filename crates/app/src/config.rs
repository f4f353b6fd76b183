//! Dashboard timing and presentation settings.

use std::time::Duration;

use nodewatch_domain::locale::Locale;

/// Interval between two scheduled polls of `/api/stats`.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Delay between a successful action and its follow-up poll, leaving the node
/// time to apply the action.
pub const FOLLOW_UP_DELAY: Duration = Duration::from_secs(1);

/// Settings of one dashboard instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardConfig {
    pub poll_interval: Duration,
    pub follow_up_delay: Duration,
    pub locale: Locale,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            poll_interval: POLL_INTERVAL,
            follow_up_delay: FOLLOW_UP_DELAY,
            locale: Locale::default(),
        }
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
