//! Client configuration loaded from TOML, with CLI overrides.

use crate::game::AgentKind;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for the Othello terminal client.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the remote engine.
    #[serde(default = "default_server_url")]
    server_url: String,

    /// Agent used for AI turns until changed in the UI.
    #[serde(default)]
    agent: AgentKind,

    /// Per-move time budget handed to the engine, in seconds.
    #[serde(default = "default_time_budget")]
    ai_time_budget: f64,
}

fn default_server_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_time_budget() -> f64 {
    1.5
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            agent: AgentKind::default(),
            ai_time_budget: default_time_budget(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {e}")))?;

        info!(server_url = %config.server_url, agent = %config.agent, "Config loaded");
        Ok(config)
    }

    /// Returns the config with the engine URL replaced.
    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = server_url.into();
        self
    }

    /// Returns the config with the default agent replaced.
    pub fn with_agent(mut self, agent: AgentKind) -> Self {
        self.agent = agent;
        self
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
