//! Time and timestamp helpers.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer};

/// UTC timestamp used for connection changes, process start, etc.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Deserialize an optional timestamp, treating `null`, a missing field and the
/// zero time (`0001-01-01T00:00:00Z`) as absent.
///
/// Some nodes report "never" as the zero time rather than omitting the field.
///
/// # Errors
///
/// Returns the deserializer error when the value is neither `null` nor an
/// RFC 3339 timestamp.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Timestamp>::deserialize(deserializer)?;
    Ok(value.filter(|ts| ts.year() > 1))
}
