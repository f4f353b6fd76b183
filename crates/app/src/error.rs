//! Errors crossing the application's port boundaries.

use nodewatch_domain::error::DecodeError;

/// Failure talking to the node's HTTP API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The node answered with a non-success status code.
    #[error("node answered with status {status}")]
    Status {
        status: u16,
        /// Message from the response body, when it carried one.
        message: Option<String>,
    },

    /// The request did not complete (network failure, aborted fetch, …).
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body did not match the expected schema.
    #[error("failed to decode response")]
    Decode(#[from] DecodeError),
}

/// Failure running a node-side action.
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    /// No action handler has been wired for this node.
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// The action ran and failed.
    #[error("{action} failed: {reason}")]
    Failed { action: &'static str, reason: String },
}
