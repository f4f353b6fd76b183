//! Actions — one-shot remote commands the user can trigger from the dashboard.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::locale::Locale;

/// A remote command exposed by the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Drop and re-establish the node's server connection.
    Reconnect,
    /// Re-read the node's account status (GP balance, quota).
    Refresh,
}

impl Action {
    /// Endpoint path, relative to the node's HTTP root.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Reconnect => "/api/reconnect",
            Self::Refresh => "/api/refresh",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Reconnect => "reconnect",
            Self::Refresh => "refresh",
        }
    }

    /// Heading of the failure notice, e.g. `Reconnect failed`.
    #[must_use]
    pub fn failure_heading(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Reconnect, Locale::En) => "Reconnect failed",
            (Self::Reconnect, Locale::ZhCn) => "重连失败",
            (Self::Refresh, Locale::En) => "Refresh failed",
            (Self::Refresh, Locale::ZhCn) => "刷新失败",
        }
    }

    /// Message shown when the node acknowledged without a message of its own.
    #[must_use]
    pub fn default_success(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Reconnect, Locale::En) => "Reconnected",
            (Self::Reconnect, Locale::ZhCn) => "重连成功",
            (Self::Refresh, Locale::En) => "Status refreshed",
            (Self::Refresh, Locale::ZhCn) => "刷新成功",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Body of an action endpoint response, on success and on failure alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionReply {
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: Some("ok".to_string()),
            message: Some(message.into()),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Some("error".to_string()),
            message: Some(message.into()),
        }
    }

    /// Decode an action endpoint response body.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Json`] when the body is not a JSON object of
    /// the expected shape.
    pub fn from_json(body: &str) -> Result<Self, DecodeError> {
        serde_json::from_str(body).map_err(|err| DecodeError::json("action reply", err))
    }
}

/// How an action invocation settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The node accepted the command.
    Succeeded { message: Option<String> },
    /// The node answered with a non-success status.
    Rejected { status: u16, message: Option<String> },
    /// The request never produced a usable answer (network or decoding).
    Failed { error: String },
}

impl ActionOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// The notice to show the user for this outcome.
    #[must_use]
    pub fn notice(&self, action: Action, locale: Locale) -> Notice {
        match self {
            Self::Succeeded { message } => {
                let message = message
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| action.default_success(locale));
                Notice {
                    tone: NoticeTone::Success,
                    text: format!("✓ {message}"),
                }
            }
            Self::Rejected { message, .. } => {
                let message = message
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| locale.unknown_error());
                Notice::failure(action, locale, message)
            }
            Self::Failed { error } => Notice::failure(action, locale, error),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Failure,
}

/// A message surfaced to the user once an action settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub tone: NoticeTone,
    pub text: String,
}

impl Notice {
    fn failure(action: Action, locale: Locale, message: &str) -> Self {
        Self {
            tone: NoticeTone::Failure,
            text: format!("✗ {}: {message}", action.failure_heading(locale)),
        }
    }
}
