//! User-facing wording for each supported locale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display language of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-CN")]
    ZhCn,
}

impl Locale {
    /// Pick a locale from a BCP 47 language tag such as `navigator.language`.
    ///
    /// Any `zh` tag selects Chinese; everything else falls back to English.
    #[must_use]
    pub fn from_language_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("zh") {
            Self::ZhCn
        } else {
            Self::En
        }
    }

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhCn => "zh-CN",
        }
    }

    #[must_use]
    pub fn connected(self) -> &'static str {
        match self {
            Self::En => "Connected",
            Self::ZhCn => "已连接",
        }
    }

    #[must_use]
    pub fn disconnected(self) -> &'static str {
        match self {
            Self::En => "Disconnected",
            Self::ZhCn => "未连接",
        }
    }

    #[must_use]
    pub fn connected_since(self) -> &'static str {
        match self {
            Self::En => "Connected since: ",
            Self::ZhCn => "连接时间: ",
        }
    }

    #[must_use]
    pub fn last_disconnect(self) -> &'static str {
        match self {
            Self::En => "Last disconnect: ",
            Self::ZhCn => "最后断开: ",
        }
    }

    /// Placeholder for a timestamp the node never reported.
    #[must_use]
    pub fn unknown(self) -> &'static str {
        match self {
            Self::En => "unknown",
            Self::ZhCn => "未知",
        }
    }

    #[must_use]
    pub fn node_id(self) -> &'static str {
        match self {
            Self::En => "Node ID: ",
            Self::ZhCn => "节点 ID: ",
        }
    }

    #[must_use]
    pub fn server(self) -> &'static str {
        match self {
            Self::En => "Server: ",
            Self::ZhCn => "服务器: ",
        }
    }

    #[must_use]
    pub fn failed(self) -> &'static str {
        match self {
            Self::En => "failed",
            Self::ZhCn => "失败",
        }
    }

    #[must_use]
    pub fn quota_available(self) -> &'static str {
        match self {
            Self::En => "✓ Free quota available",
            Self::ZhCn => "✓ 有免费额度",
        }
    }

    #[must_use]
    pub fn quota_unavailable(self) -> &'static str {
        match self {
            Self::En => "✗ No free quota",
            Self::ZhCn => "✗ 无免费额度",
        }
    }

    #[must_use]
    pub fn started_at(self) -> &'static str {
        match self {
            Self::En => "Started ",
            Self::ZhCn => "启动于 ",
        }
    }

    #[must_use]
    pub fn unknown_error(self) -> &'static str {
        match self {
            Self::En => "unknown error",
            Self::ZhCn => "未知错误",
        }
    }

    /// Render a count with its unit, e.g. `3 hours` / `3 小时`.
    #[must_use]
    pub fn quantity(self, count: i64, unit: TimeUnit) -> String {
        match self {
            Self::En => {
                let word = match (unit, count == 1) {
                    (TimeUnit::Day, true) => "day",
                    (TimeUnit::Day, false) => "days",
                    (TimeUnit::Hour, true) => "hour",
                    (TimeUnit::Hour, false) => "hours",
                    (TimeUnit::Minute, true) => "minute",
                    (TimeUnit::Minute, false) => "minutes",
                };
                format!("{count} {word}")
            }
            Self::ZhCn => {
                let word = match unit {
                    TimeUnit::Day => "天",
                    TimeUnit::Hour => "小时",
                    TimeUnit::Minute => "分钟",
                };
                format!("{count} {word}")
            }
        }
    }

    /// `strftime` pattern matching the browser's `toLocaleString` output.
    #[must_use]
    pub fn timestamp_pattern(self) -> &'static str {
        match self {
            Self::En => "%-m/%-d/%Y, %-I:%M:%S %p",
            Self::ZhCn => "%Y/%-m/%-d %H:%M:%S",
        }
    }
}

/// Units used when spelling out an uptime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Day,
    Hour,
    Minute,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Returned when parsing an unsupported locale tag.
#[derive(Debug, thiserror::Error)]
#[error("unsupported locale: {0}")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "zh-CN" => Ok(Self::ZhCn),
            other => Err(UnsupportedLocale(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pick_chinese_for_any_zh_tag() {
        assert_eq!(Locale::from_language_tag("zh-CN"), Locale::ZhCn);
        assert_eq!(Locale::from_language_tag("zh_TW"), Locale::ZhCn);
        assert_eq!(Locale::from_language_tag("ZH"), Locale::ZhCn);
    }

    #[test]
    fn should_fall_back_to_english() {
        assert_eq!(Locale::from_language_tag("en-GB"), Locale::En);
        assert_eq!(Locale::from_language_tag("fr"), Locale::En);
        assert_eq!(Locale::from_language_tag(""), Locale::En);
    }

    #[test]
    fn should_pluralize_english_units() {
        assert_eq!(Locale::En.quantity(1, TimeUnit::Day), "1 day");
        assert_eq!(Locale::En.quantity(0, TimeUnit::Hour), "0 hours");
        assert_eq!(Locale::En.quantity(59, TimeUnit::Minute), "59 minutes");
    }

    #[test]
    fn should_not_pluralize_chinese_units() {
        assert_eq!(Locale::ZhCn.quantity(1, TimeUnit::Day), "1 天");
        assert_eq!(Locale::ZhCn.quantity(2, TimeUnit::Hour), "2 小时");
    }

    #[test]
    fn should_parse_own_tags() {
        for locale in [Locale::En, Locale::ZhCn] {
            assert_eq!(locale.tag().parse::<Locale>().unwrap(), locale);
        }
        assert!("de".parse::<Locale>().is_err());
    }
}
