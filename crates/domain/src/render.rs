//! Renderer — turns a snapshot into display values.

use chrono::{DateTime, FixedOffset, Utc};

use crate::display::{Badge, BadgeState, DisplayTarget, DisplayValue, RenderTarget};
use crate::format::{
    failure_suffix, fixed, format_timestamp, format_uptime, group_digits, gp_progress_percent,
    size_display,
};
use crate::locale::Locale;
use crate::snapshot::Snapshot;
use crate::time::Timestamp;

/// Everything a render depends on besides the snapshot itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Wall-clock time of the render, in the viewer's timezone.
    pub now: DateTime<FixedOffset>,
    pub locale: Locale,
}

impl RenderContext {
    #[must_use]
    pub fn new(now: DateTime<FixedOffset>, locale: Locale) -> Self {
        Self { now, locale }
    }

    fn timestamp(&self, ts: Timestamp) -> String {
        format_timestamp(ts, *self.now.offset(), self.locale)
    }
}

/// Write every display target for `snapshot`.
///
/// Performs no write at all when no snapshot has been loaded yet. Uptime and
/// the last-update label derive from `ctx.now`, so two renders of the same
/// snapshot may differ.
pub fn render<T: RenderTarget + ?Sized>(
    snapshot: Option<&Snapshot>,
    ctx: &RenderContext,
    target: &mut T,
) {
    let Some(stats) = snapshot else {
        return;
    };
    let locale = ctx.locale;

    target.write(DisplayTarget::ConnectionStatus, connection_badge(stats, ctx).into());

    target.write(
        DisplayTarget::NodeId,
        format!("{}{}", locale.node_id(), stats.node_id).into(),
    );
    target.write(
        DisplayTarget::ServerUrl,
        format!("{}{}", locale.server(), stats.server_url).into(),
    );

    target.write(
        DisplayTarget::TodayTasksCompleted,
        stats.today_tasks_completed.to_string().into(),
    );
    target.write(
        DisplayTarget::TasksCompleted,
        stats.tasks_completed.to_string().into(),
    );
    target.write(
        DisplayTarget::TaskFailInfo,
        failure_suffix(stats.tasks_failed, locale).into(),
    );

    target.write(DisplayTarget::GpBalance, group_digits(stats.gp_balance).into());
    target.write(DisplayTarget::TodayGpCost, group_digits(stats.today_gp_cost).into());
    target.write(DisplayTarget::TotalGpCost, group_digits(stats.total_gp_cost).into());

    let quota = if stats.have_free_quota {
        Badge {
            state: BadgeState::QuotaAvailable,
            label: locale.quota_available().to_string(),
            detail: None,
        }
    } else {
        Badge {
            state: BadgeState::QuotaUnavailable,
            label: locale.quota_unavailable().to_string(),
            detail: None,
        }
    };
    target.write(DisplayTarget::QuotaStatus, quota.into());

    target.write(
        DisplayTarget::GpProgress,
        DisplayValue::Percent(gp_progress_percent(stats.today_gp_cost, stats.max_gp_cost)),
    );

    target.write(DisplayTarget::AvgGpPerTask, fixed(stats.avg_gp_per_task, 1).into());
    target.write(DisplayTarget::AvgSizeMib, fixed(stats.avg_size_mib, 1).into());

    let size = size_display(stats.total_size_mib);
    target.write(DisplayTarget::TotalSizeValue, size.value.into());
    target.write(DisplayTarget::TotalSizeUnit, size.unit.label().into());

    let elapsed = ctx
        .now
        .with_timezone(&Utc)
        .signed_duration_since(stats.start_time);
    target.write(DisplayTarget::Uptime, format_uptime(elapsed, locale).into());
    target.write(
        DisplayTarget::StartTime,
        format!("{}{}", locale.started_at(), ctx.timestamp(stats.start_time)).into(),
    );

    target.write(
        DisplayTarget::LastUpdate,
        ctx.now.format(locale.timestamp_pattern()).to_string().into(),
    );
}

fn connection_badge(stats: &Snapshot, ctx: &RenderContext) -> Badge {
    let locale = ctx.locale;
    if stats.connected {
        let since = stats
            .connected_since
            .map_or_else(|| locale.unknown().to_string(), |ts| ctx.timestamp(ts));
        Badge {
            state: BadgeState::Connected,
            label: locale.connected().to_string(),
            detail: Some(format!("{}{since}", locale.connected_since())),
        }
    } else {
        let last = stats
            .last_disconnect
            .map_or_else(|| locale.unknown().to_string(), |ts| ctx.timestamp(ts));
        Badge {
            state: BadgeState::Disconnected,
            label: locale.disconnected().to_string(),
            detail: Some(format!("{}{last}", locale.last_disconnect())),
        }
    }
}
