//! Formatting helpers shared by the renderer.
//!
//! Unit conversion and duration formatting are the only computations the
//! dashboard performs on a snapshot; everything here is a pure function.

use chrono::{FixedOffset, TimeDelta};

use crate::locale::{Locale, TimeUnit};
use crate::time::Timestamp;

/// MiB per GiB.
const MIB_PER_GIB: f64 = 1024.0;

/// Format a number with `,` thousands separators and at most three
/// fraction digits, trailing zeros dropped (`1234567.5` → `1,234,567.5`).
#[must_use]
pub fn group_digits(value: f64) -> String {
    let rendered = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(rendered.len() + rendered.len() / 3 + 1);
    if value.is_sign_negative() && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Format `value` with exactly `decimals` fraction digits.
#[must_use]
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// The ` • N failed` suffix shown next to the lifetime task counter, or an
/// empty string when nothing failed.
#[must_use]
pub fn failure_suffix(tasks_failed: u64, locale: Locale) -> String {
    if tasks_failed > 0 {
        format!(" • {tasks_failed} {}", locale.failed())
    } else {
        String::new()
    }
}

/// Width of the daily GP progress bar, in percent of its track.
///
/// Clamped to `100`. A cap of `0` (no cap configured) yields `0`.
#[must_use]
pub fn gp_progress_percent(today_gp_cost: f64, max_gp_cost: f64) -> f64 {
    if max_gp_cost > 0.0 {
        (today_gp_cost / max_gp_cost * 100.0).min(100.0)
    } else {
        0.0
    }
}

/// Unit label of a displayed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    MiB,
    GiB,
}

impl SizeUnit {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MiB => "MiB",
            Self::GiB => "GiB",
        }
    }
}

/// A size ready for display: formatted value plus its unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeDisplay {
    pub value: String,
    pub unit: SizeUnit,
}

/// Promote a MiB total to GiB once it reaches one GiB.
///
/// GiB values carry two decimals, MiB values one.
#[must_use]
pub fn size_display(total_mib: f64) -> SizeDisplay {
    let total_gib = total_mib / MIB_PER_GIB;
    if total_gib >= 1.0 {
        SizeDisplay {
            value: fixed(total_gib, 2),
            unit: SizeUnit::GiB,
        }
    } else {
        SizeDisplay {
            value: fixed(total_mib, 1),
            unit: SizeUnit::MiB,
        }
    }
}

/// Spell out an uptime.
///
/// Above 24 whole hours: `D days H hours`; otherwise `H hours M minutes`.
/// Negative durations (clock skew between node and browser) count as zero.
#[must_use]
pub fn format_uptime(elapsed: TimeDelta, locale: Locale) -> String {
    let elapsed = elapsed.max(TimeDelta::zero());
    let hours = elapsed.num_hours();
    if hours > 24 {
        format!(
            "{} {}",
            locale.quantity(hours / 24, TimeUnit::Day),
            locale.quantity(hours % 24, TimeUnit::Hour)
        )
    } else {
        format!(
            "{} {}",
            locale.quantity(hours, TimeUnit::Hour),
            locale.quantity(elapsed.num_minutes() % 60, TimeUnit::Minute)
        )
    }
}

/// Format an instant in the viewer's timezone, the way the locale's
/// `toLocaleString` would.
#[must_use]
pub fn format_timestamp(ts: Timestamp, offset: FixedOffset, locale: Locale) -> String {
    ts.with_timezone(&offset)
        .format(locale.timestamp_pattern())
        .to_string()
}
