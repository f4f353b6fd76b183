//! Shared application state for axum handlers.

use std::sync::Arc;

use nodewatch_app::ports::NodeControl;
use nodewatch_app::services::control_service::ControlService;
use nodewatch_app::services::stats_recorder::StatsRecorder;

/// Application state shared across all axum handlers.
///
/// Generic over the node control hooks to avoid dynamic dispatch.
/// `Clone` is implemented manually so `C` itself does not need to be
/// `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<C> {
    /// Live stats of the node, shared with its worker loop.
    pub recorder: Arc<StatsRecorder>,
    /// Reconnect / refresh use-cases.
    pub control: Arc<ControlService<C>>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            recorder: Arc::clone(&self.recorder),
            control: Arc::clone(&self.control),
        }
    }
}

impl<C> AppState<C>
where
    C: NodeControl + Send + Sync + 'static,
{
    /// Create the state from a shared recorder and the node's control hooks.
    pub fn new(recorder: Arc<StatsRecorder>, control: C) -> Self {
        Self {
            recorder,
            control: Arc::new(ControlService::new(control)),
        }
    }
}
