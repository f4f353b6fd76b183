//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use nodewatch_app::error::ControlError;
use nodewatch_domain::action::ActionReply;

/// Maps [`ControlError`] to a `500` carrying an `{"status":"error"}` body.
pub struct ApiErrorResponse(ControlError);

impl From<ControlError> for ApiErrorResponse {
    fn from(err: ControlError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        match &self.0 {
            ControlError::NotConfigured(action) => {
                tracing::warn!(action, "action requested but not configured");
            }
            ControlError::Failed { action, reason } => {
                tracing::error!(action, reason = %reason, "action failed");
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ActionReply::error(self.0.to_string())),
        )
            .into_response()
    }
}
