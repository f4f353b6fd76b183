//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `nodewatch.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Identity of the node whose stats are served.
    pub node: NodeConfig,
    /// Static dashboard assets.
    pub dashboard: DashboardConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Simulated worker.
    pub simulation: SimulationConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Identifier shown on the dashboard.
    pub id: String,
    /// Task server the node connects to.
    pub server_url: String,
    /// Daily GP budget; `0` disables the progress bar.
    pub max_gp_cost: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory holding the compiled dashboard (`index.html`, wasm, css).
    /// Only the API is served when unset.
    pub assets_dir: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Run the virtual node. When disabled, the action endpoints answer
    /// "not configured".
    pub enabled: bool,
    /// Seconds between two simulated tasks.
    pub task_interval_secs: u64,
}

impl Config {
    /// Load configuration from `nodewatch.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("nodewatch.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply `NODEWATCH_*` overrides read through `var`.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("NODEWATCH_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("NODEWATCH_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("NODEWATCH_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("NODEWATCH_NODE_ID") {
            self.node.id = val;
        }
        if let Some(val) = var("NODEWATCH_SERVER_URL") {
            self.node.server_url = val;
        }
        if let Some(cost) = var("NODEWATCH_MAX_GP_COST").and_then(|val| val.parse().ok()) {
            self.node.max_gp_cost = cost;
        }
        if let Some(val) = var("NODEWATCH_ASSETS_DIR") {
            self.dashboard.assets_dir = Some(PathBuf::from(val));
        }
        if let Some(enabled) = var("NODEWATCH_SIMULATION").and_then(|val| val.parse().ok()) {
            self.simulation.enabled = enabled;
        }
        if let Some(val) = var("NODEWATCH_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.node.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "node id must not be empty".to_string(),
            ));
        }
        if !self.node.max_gp_cost.is_finite() || self.node.max_gp_cost < 0.0 {
            return Err(ConfigError::Validation(
                "max_gp_cost must be a non-negative number".to_string(),
            ));
        }
        if self.simulation.enabled && self.simulation.task_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "task_interval_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl SimulationConfig {
    #[must_use]
    pub fn task_interval(&self) -> Duration {
        Duration::from_secs(self.task_interval_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            id: "local-node".to_string(),
            server_url: "ws://127.0.0.1:9000/ws".to_string(),
            max_gp_cost: 5_000.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "nodewatchd=info,nodewatch_app=info,nodewatch_adapter_virtual=info,tower_http=debug"
                .to_string(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            task_interval_secs: 5,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn overridden(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).cloned());
        config
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.node.id, "local-node");
        assert!((config.node.max_gp_cost - 5_000.0).abs() < f64::EPSILON);
        assert!(config.dashboard.assets_dir.is_none());
        assert!(config.simulation.enabled);
        assert_eq!(config.simulation.task_interval(), Duration::from_secs(5));
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [node]
            id = 'worker-7'
            server_url = 'wss://hub.example.org/ws'
            max_gp_cost = 12000.0

            [dashboard]
            assets_dir = 'dist'

            [logging]
            filter = 'debug'

            [simulation]
            enabled = false
            task_interval_secs = 2
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.node.id, "worker-7");
        assert_eq!(config.node.server_url, "wss://hub.example.org/ws");
        assert!((config.node.max_gp_cost - 12_000.0).abs() < f64::EPSILON);
        assert_eq!(config.dashboard.assets_dir, Some(PathBuf::from("dist")));
        assert_eq!(config.logging.filter, "debug");
        assert!(!config.simulation.enabled);
        assert_eq!(config.simulation.task_interval_secs, 2);
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [node]
            id = 'worker-7'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.node.id, "worker-7");
        assert_eq!(config.node.server_url, "ws://127.0.0.1:9000/ws");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_apply_env_overrides() {
        let config = overridden(&[
            ("NODEWATCH_PORT", "9191"),
            ("NODEWATCH_NODE_ID", "worker-3"),
            ("NODEWATCH_MAX_GP_COST", "800"),
            ("NODEWATCH_ASSETS_DIR", "/srv/dashboard"),
            ("NODEWATCH_SIMULATION", "false"),
        ]);
        assert_eq!(config.server.port, 9191);
        assert_eq!(config.node.id, "worker-3");
        assert!((config.node.max_gp_cost - 800.0).abs() < f64::EPSILON);
        assert_eq!(
            config.dashboard.assets_dir,
            Some(PathBuf::from("/srv/dashboard"))
        );
        assert!(!config.simulation.enabled);
    }

    #[test]
    fn should_split_bind_override() {
        let config = overridden(&[("NODEWATCH_BIND", "127.0.0.1:7000")]);
        assert_eq!(config.bind_addr(), "127.0.0.1:7000");
    }

    #[test]
    fn should_ignore_unparsable_overrides() {
        let config = overridden(&[("NODEWATCH_PORT", "http"), ("NODEWATCH_MAX_GP_COST", "lots")]);
        assert_eq!(config.server.port, 8080);
        assert!((config.node.max_gp_cost - 5_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_prefer_rust_log_over_nodewatch_log() {
        let config = overridden(&[("NODEWATCH_LOG", "warn"), ("RUST_LOG", "trace")]);
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_empty_node_id() {
        let mut config = Config::default();
        config.node.id = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: node id must not be empty"
        );
    }

    #[test]
    fn should_reject_negative_gp_budget() {
        let mut config = Config::default();
        config.node.max_gp_cost = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_task_interval_when_simulating() {
        let mut config = Config::default();
        config.simulation.task_interval_secs = 0;
        assert!(config.validate().is_err());

        config.simulation.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }
}
