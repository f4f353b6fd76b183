//! `GET /api/stats` — the node's live snapshot.

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use nodewatch_app::ports::NodeControl;
use nodewatch_domain::snapshot::Snapshot;

use crate::state::AppState;

/// Possible responses from the stats endpoint.
pub enum GetResponse {
    Ok(Json<Snapshot>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            // Dashboards hosted elsewhere may poll the node directly.
            Self::Ok(json) => ([(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")], json).into_response(),
        }
    }
}

/// `GET /api/stats`
pub async fn get<C>(State(state): State<AppState<C>>) -> GetResponse
where
    C: NodeControl + Send + Sync + 'static,
{
    GetResponse::Ok(Json(state.recorder.snapshot().await))
}
