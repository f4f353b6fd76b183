//! Action endpoints — `POST /api/reconnect` and `POST /api/refresh`.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use nodewatch_app::ports::NodeControl;
use nodewatch_domain::action::ActionReply;

use crate::error::ApiErrorResponse;
use crate::state::AppState;

/// Possible responses from an action endpoint.
pub enum ActionResponse {
    Ok(Json<ActionReply>),
}

impl ActionResponse {
    fn ok(message: &str) -> Self {
        Self::Ok(Json(ActionReply::ok(message)))
    }
}

impl IntoResponse for ActionResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/reconnect`
pub async fn reconnect<C>(
    State(state): State<AppState<C>>,
) -> Result<ActionResponse, ApiErrorResponse>
where
    C: NodeControl + Send + Sync + 'static,
{
    let message = state.control.reconnect().await?;
    Ok(ActionResponse::ok(message))
}

/// `POST /api/refresh`
pub async fn refresh<C>(
    State(state): State<AppState<C>>,
) -> Result<ActionResponse, ApiErrorResponse>
where
    C: NodeControl + Send + Sync + 'static,
{
    let message = state.control.refresh_status().await?;
    Ok(ActionResponse::ok(message))
}
