//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod control;
pub mod stats;

use axum::Router;
use axum::routing::{get, post};

use nodewatch_app::ports::NodeControl;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<C>() -> Router<AppState<C>>
where
    C: NodeControl + Send + Sync + 'static,
{
    Router::new()
        .route("/stats", get(stats::get::<C>))
        .route("/reconnect", post(control::reconnect::<C>))
        .route("/refresh", post(control::refresh::<C>))
}
