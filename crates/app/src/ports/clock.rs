//! Clock port — render-time wall clock.

use chrono::{DateTime, FixedOffset, Local};

/// Current wall-clock time, in the viewer's timezone.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// [`Clock`] backed by the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}
