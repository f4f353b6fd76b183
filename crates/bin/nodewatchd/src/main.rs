//! # nodewatchd — node stats daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`nodewatch.toml`, `NODEWATCH_*` env vars)
//! - Install the `tracing` subscriber
//! - Construct the node's `StatsRecorder` and its control hooks
//! - Build the axum router (API + static dashboard assets)
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use nodewatch_adapter_http_axum::router;
use nodewatch_adapter_http_axum::state::AppState;
use nodewatch_adapter_virtual::{SimulatedAccount, TaskSimulator, VirtualNode};
use nodewatch_app::ports::Unconfigured;
use nodewatch_app::services::stats_recorder::StatsRecorder;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.filter).context("parsing log filter")?,
        )
        .init();

    let recorder = Arc::new(StatsRecorder::new(
        &config.node.id,
        &config.node.server_url,
        config.node.max_gp_cost,
    ));
    let assets_dir = config.dashboard.assets_dir.as_deref();
    let (shutdown, shutdown_rx) = watch::channel(false);

    let app = if config.simulation.enabled {
        let node = Arc::new(VirtualNode::new(
            Arc::clone(&recorder),
            SimulatedAccount::default(),
        ));
        node.start().await;
        let simulator = TaskSimulator::new(Arc::clone(&node), config.simulation.task_interval());
        tokio::spawn(simulator.run(shutdown_rx));
        router::build(AppState::new(recorder, node), assets_dir)
    } else {
        tracing::warn!("simulation disabled, reconnect and refresh are not configured");
        router::build(AppState::new(recorder, Unconfigured), assets_dir)
    };

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!(
        node_id = %config.node.id,
        assets = ?assets_dir,
        "nodewatchd listening on http://{bind_addr}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shutdown.send_replace(true);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
