//! Control service — use-cases behind the node's action endpoints.

use crate::error::ControlError;
use crate::ports::NodeControl;

/// Acknowledgement returned after a successful reconnect.
pub const RECONNECTED: &str = "reconnected";
/// Acknowledgement returned after a successful status refresh.
pub const REFRESHED: &str = "refreshed";

/// Runs reconnect / refresh requests against the node's [`NodeControl`].
pub struct ControlService<C> {
    control: C,
}

impl<C: NodeControl> ControlService<C> {
    pub fn new(control: C) -> Self {
        Self { control }
    }

    /// Re-establish the node's server connection and return the
    /// acknowledgement message.
    ///
    /// # Errors
    ///
    /// Returns the [`ControlError`] reported by the node.
    #[tracing::instrument(skip(self))]
    pub async fn reconnect(&self) -> Result<&'static str, ControlError> {
        tracing::info!("manual reconnect requested");
        match self.control.reconnect().await {
            Ok(()) => Ok(RECONNECTED),
            Err(err) => {
                tracing::warn!(error = %err, "reconnect failed");
                Err(err)
            }
        }
    }

    /// Re-read the node's account status.
    ///
    /// # Errors
    ///
    /// Returns the [`ControlError`] reported by the node.
    #[tracing::instrument(skip(self))]
    pub async fn refresh_status(&self) -> Result<&'static str, ControlError> {
        tracing::info!("manual status refresh requested");
        match self.control.refresh_status().await {
            Ok(()) => Ok(REFRESHED),
            Err(err) => {
                tracing::warn!(error = %err, "status refresh failed");
                Err(err)
            }
        }
    }
}
