//! Stats API port — the node's HTTP surface as seen by the dashboard.

use std::future::Future;
use std::rc::Rc;

use nodewatch_domain::action::{Action, ActionReply};
use nodewatch_domain::snapshot::Snapshot;

use crate::error::ApiError;

/// Client for the node's `/api/*` endpoints.
///
/// Futures are not required to be `Send`: the dashboard drives them on a
/// single-threaded event loop.
pub trait StatsApi {
    /// `GET /api/stats`.
    ///
    /// Non-success statuses must surface as [`ApiError::Status`].
    fn fetch_stats(&self) -> impl Future<Output = Result<Snapshot, ApiError>>;

    /// `POST` to the action's endpoint with an empty body.
    ///
    /// A non-success status must surface as [`ApiError::Status`], carrying the
    /// reply's `message` when the body could be decoded.
    fn trigger(&self, action: Action) -> impl Future<Output = Result<ActionReply, ApiError>>;
}

impl<T: StatsApi> StatsApi for Rc<T> {
    fn fetch_stats(&self) -> impl Future<Output = Result<Snapshot, ApiError>> {
        (**self).fetch_stats()
    }

    fn trigger(&self, action: Action) -> impl Future<Output = Result<ActionReply, ApiError>> {
        (**self).trigger(action)
    }
}
