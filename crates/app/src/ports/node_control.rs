//! Node control port — the node-side hooks behind `/api/reconnect` and
//! `/api/refresh`.

use std::future::Future;
use std::sync::Arc;

use crate::error::ControlError;

/// Actions the node performs on request of the dashboard.
pub trait NodeControl {
    /// Drop and re-establish the connection to the task server.
    fn reconnect(&self) -> impl Future<Output = Result<(), ControlError>> + Send;

    /// Re-read the account status (GP balance, free quota) and record it.
    fn refresh_status(&self) -> impl Future<Output = Result<(), ControlError>> + Send;
}

impl<T: NodeControl + Send + Sync> NodeControl for Arc<T> {
    fn reconnect(&self) -> impl Future<Output = Result<(), ControlError>> + Send {
        (**self).reconnect()
    }

    fn refresh_status(&self) -> impl Future<Output = Result<(), ControlError>> + Send {
        (**self).refresh_status()
    }
}

/// Stand-in for a node with no control hooks wired: every action fails with
/// [`ControlError::NotConfigured`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconfigured;

impl NodeControl for Unconfigured {
    fn reconnect(&self) -> impl Future<Output = Result<(), ControlError>> + Send {
        std::future::ready(Err(ControlError::NotConfigured("reconnect")))
    }

    fn refresh_status(&self) -> impl Future<Output = Result<(), ControlError>> + Send {
        std::future::ready(Err(ControlError::NotConfigured("refresh")))
    }
}
