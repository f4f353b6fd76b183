//! Snapshot — the node's operational metrics at one instant.
//!
//! A snapshot is produced by the node (`GET /api/stats`) and read, never
//! mutated, by the dashboard. The JSON shape uses camelCase keys, with the
//! `GP` and `MiB` acronyms kept upper-cased.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::time::{self, Timestamp};

/// Operational metrics of a single worker node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Whether the node currently holds a connection to its server.
    pub connected: bool,
    /// When the current connection was established. Meaningful only while connected.
    #[serde(default, deserialize_with = "time::deserialize_optional")]
    pub connected_since: Option<Timestamp>,
    /// When the node last lost its connection. Meaningful only while disconnected.
    #[serde(default, deserialize_with = "time::deserialize_optional")]
    pub last_disconnect: Option<Timestamp>,

    pub node_id: String,
    pub server_url: String,

    /// Tasks completed since local midnight.
    pub today_tasks_completed: u64,
    /// Tasks completed over the node's lifetime.
    pub tasks_completed: u64,
    /// Tasks failed over the node's lifetime.
    pub tasks_failed: u64,

    pub gp_balance: f64,
    #[serde(rename = "todayGPCost")]
    pub today_gp_cost: f64,
    #[serde(rename = "totalGPCost")]
    pub total_gp_cost: f64,
    /// Daily GP cap; `0` means no cap is configured.
    #[serde(rename = "maxGPCost")]
    pub max_gp_cost: f64,
    pub have_free_quota: bool,

    #[serde(rename = "avgGPPerTask")]
    pub avg_gp_per_task: f64,
    #[serde(rename = "avgSizeMiB")]
    pub avg_size_mib: f64,
    #[serde(rename = "totalSizeMiB")]
    pub total_size_mib: f64,

    /// Process start instant, used to derive uptime.
    pub start_time: Timestamp,
}

impl Snapshot {
    /// An empty snapshot for a node that just started: disconnected, no
    /// tasks, no GP activity.
    #[must_use]
    pub fn new(
        node_id: impl Into<String>,
        server_url: impl Into<String>,
        max_gp_cost: f64,
        start_time: Timestamp,
    ) -> Self {
        Self {
            connected: false,
            connected_since: None,
            last_disconnect: None,
            node_id: node_id.into(),
            server_url: server_url.into(),
            today_tasks_completed: 0,
            tasks_completed: 0,
            tasks_failed: 0,
            gp_balance: 0.0,
            today_gp_cost: 0.0,
            total_gp_cost: 0.0,
            max_gp_cost,
            have_free_quota: false,
            avg_gp_per_task: 0.0,
            avg_size_mib: 0.0,
            total_size_mib: 0.0,
            start_time,
        }
    }

    /// Decode a snapshot from a `/api/stats` response body.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Json`] when the body is not a snapshot.
    pub fn from_json(body: &str) -> Result<Self, DecodeError> {
        serde_json::from_str(body).map_err(|err| DecodeError::json("snapshot", err))
    }
}
