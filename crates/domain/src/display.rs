//! Display contract: the named targets the renderer writes into.
//!
//! Each [`DisplayTarget`] has a stable DOM identifier (the id the page markup
//! must carry) and accepts exactly one [`ValueKind`]. Renaming an identifier
//! is a breaking change for every page built against this contract.

use std::collections::BTreeMap;

/// Every field of the dashboard the renderer can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DisplayTarget {
    ConnectionStatus,
    NodeId,
    ServerUrl,
    TodayTasksCompleted,
    TasksCompleted,
    TaskFailInfo,
    GpBalance,
    TodayGpCost,
    TotalGpCost,
    QuotaStatus,
    GpProgress,
    AvgGpPerTask,
    AvgSizeMib,
    TotalSizeValue,
    TotalSizeUnit,
    Uptime,
    StartTime,
    LastUpdate,
}

impl DisplayTarget {
    /// Number of targets in the contract.
    pub const COUNT: usize = 18;

    /// All targets, in page order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::ConnectionStatus,
        Self::NodeId,
        Self::ServerUrl,
        Self::TodayTasksCompleted,
        Self::TasksCompleted,
        Self::TaskFailInfo,
        Self::GpBalance,
        Self::TodayGpCost,
        Self::TotalGpCost,
        Self::QuotaStatus,
        Self::GpProgress,
        Self::AvgGpPerTask,
        Self::AvgSizeMib,
        Self::TotalSizeValue,
        Self::TotalSizeUnit,
        Self::Uptime,
        Self::StartTime,
        Self::LastUpdate,
    ];

    /// Stable DOM identifier of the element backing this target.
    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::ConnectionStatus => "connectionStatus",
            Self::NodeId => "nodeId",
            Self::ServerUrl => "serverUrl",
            Self::TodayTasksCompleted => "todayTasksCompleted",
            Self::TasksCompleted => "tasksCompleted",
            Self::TaskFailInfo => "taskFailInfo",
            Self::GpBalance => "gpBalance",
            Self::TodayGpCost => "todayGPCost",
            Self::TotalGpCost => "totalGPCost",
            Self::QuotaStatus => "quotaStatus",
            Self::GpProgress => "gpProgress",
            Self::AvgGpPerTask => "avgGPPerTask",
            Self::AvgSizeMib => "avgSizeMiB",
            Self::TotalSizeValue => "totalSizeMiB",
            Self::TotalSizeUnit => "totalSizeUnit",
            Self::Uptime => "uptime",
            Self::StartTime => "startTime",
            Self::LastUpdate => "lastUpdate",
        }
    }

    /// The kind of value this target accepts.
    #[must_use]
    pub fn kind(self) -> ValueKind {
        match self {
            Self::ConnectionStatus | Self::QuotaStatus => ValueKind::Badge,
            Self::GpProgress => ValueKind::Percent,
            _ => ValueKind::Text,
        }
    }

    /// Position of this target in [`Self::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Shape of a value accepted by a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Plain text content.
    Text,
    /// A status indicator: visual state, label and optional detail line.
    Badge,
    /// A width in percent of the enclosing track.
    Percent,
}

/// Visual state of a badge; each maps to one CSS class of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeState {
    Connected,
    Disconnected,
    QuotaAvailable,
    QuotaUnavailable,
}

impl BadgeState {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
            Self::QuotaAvailable => "available",
            Self::QuotaUnavailable => "unavailable",
        }
    }

    /// Whether the badge shows a coloured dot before its label. Quota badges
    /// carry their ✓ / ✗ in the label instead.
    #[must_use]
    pub fn has_indicator(self) -> bool {
        matches!(self, Self::Connected | Self::Disconnected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub state: BadgeState,
    pub label: String,
    pub detail: Option<String>,
}

/// A value written into a target.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayValue {
    Text(String),
    Badge(Badge),
    Percent(f64),
}

impl DisplayValue {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Badge(_) => ValueKind::Badge,
            Self::Percent(_) => ValueKind::Percent,
        }
    }

    /// The text content, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// CSS width for a percent value (`"42%"`).
    #[must_use]
    pub fn as_css_width(&self) -> Option<String> {
        match self {
            Self::Percent(percent) => Some(format!("{percent}%")),
            _ => None,
        }
    }
}

impl From<String> for DisplayValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for DisplayValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Badge> for DisplayValue {
    fn from(badge: Badge) -> Self {
        Self::Badge(badge)
    }
}

/// Sink the renderer writes into.
///
/// Implemented by the browser adapter (reactive signals bound to the page)
/// and by [`MemoryTarget`] for headless use and tests.
pub trait RenderTarget {
    /// Replace the content of `target` with `value`.
    fn write(&mut self, target: DisplayTarget, value: DisplayValue);
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn write(&mut self, target: DisplayTarget, value: DisplayValue) {
        (**self).write(target, value);
    }
}

/// In-memory render target that keeps the latest value per target and counts
/// every write.
#[derive(Debug, Default, Clone)]
pub struct MemoryTarget {
    values: BTreeMap<DisplayTarget, DisplayValue>,
    writes: usize,
}

impl MemoryTarget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, target: DisplayTarget) -> Option<&DisplayValue> {
        self.values.get(&target)
    }

    /// Text content of `target`, if it holds text.
    #[must_use]
    pub fn text(&self, target: DisplayTarget) -> Option<&str> {
        self.get(target).and_then(DisplayValue::as_text)
    }

    /// Total number of writes received so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn iter(&self) -> impl Iterator<Item = (DisplayTarget, &DisplayValue)> {
        self.values.iter().map(|(target, value)| (*target, value))
    }
}

impl RenderTarget for MemoryTarget {
    fn write(&mut self, target: DisplayTarget, value: DisplayValue) {
        self.writes += 1;
        self.values.insert(target, value);
    }
}
