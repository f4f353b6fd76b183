//! HTTP API client wrapping `gloo-net` for calls to the node's `/api/*`.

use gloo_net::http::{Request, Response};

use nodewatch_app::error::ApiError;
use nodewatch_app::ports::StatsApi;
use nodewatch_domain::action::{Action, ActionReply};
use nodewatch_domain::snapshot::Snapshot;

const STATS_PATH: &str = "/api/stats";

/// [`StatsApi`] over `fetch`.
#[derive(Debug, Clone, Default)]
pub struct HttpStatsApi {
    base: String,
}

impl HttpStatsApi {
    /// Talk to the node that served the page.
    pub fn same_origin() -> Self {
        Self::default()
    }

    /// Talk to the node at `base`, e.g. `http://10.0.0.7:8080`.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base.trim_end_matches('/'))
    }
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Read the response body, turning a non-2xx status into
/// [`status_error`].
async fn read_body(resp: Response) -> Result<String, ApiError> {
    let body = resp.text().await.map_err(transport)?;
    if resp.ok() {
        return Ok(body);
    }
    Err(status_error(resp.status(), &body))
}

/// [`ApiError::Status`] carrying the body's `message`, when the body is an
/// action reply that has one.
fn status_error(status: u16, body: &str) -> ApiError {
    let message = ActionReply::from_json(body)
        .ok()
        .and_then(|reply| reply.message)
        .filter(|message| !message.is_empty());
    ApiError::Status { status, message }
}

impl StatsApi for HttpStatsApi {
    async fn fetch_stats(&self) -> Result<Snapshot, ApiError> {
        let resp = Request::get(&self.url(STATS_PATH))
            .send()
            .await
            .map_err(transport)?;
        let body = read_body(resp).await?;
        Ok(Snapshot::from_json(&body)?)
    }

    async fn trigger(&self, action: Action) -> Result<ActionReply, ApiError> {
        let resp = Request::post(&self.url(action.path()))
            .send()
            .await
            .map_err(transport)?;
        let body = read_body(resp).await?;
        Ok(ActionReply::from_json(&body)?)
    }
}
