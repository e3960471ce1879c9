//! Connection settings.
//!
//! Settings come from three layers: built-in defaults, an optional YAML
//! file, and command-line flags. Later layers win.
//!
//! ```yaml
//! host: switch1.example.net
//! agent_port: 5909
//! qsfp_port: 5910
//! timeout_secs: 5
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use portctl::rpc::{Agent, DEFAULT_TIMEOUT, Qsfp, Service};
use serde::Deserialize;

/// Host used when neither the file nor the command line names one.
pub const DEFAULT_HOST: &str = "::1";

/// Contents of a config file. Every key is optional.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<String>,
    pub agent_port: Option<u16>,
    pub qsfp_port: Option<u16>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        // An empty file is a valid, empty config.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }
}

/// Values given on the command line.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub host: Option<String>,
    pub agent_port: Option<u16>,
    pub qsfp_port: Option<u16>,
    pub timeout_secs: Option<u64>,
}

/// Resolved connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub agent_port: u16,
    pub qsfp_port: u16,
    pub timeout: Duration,
}

impl Settings {
    pub fn resolve(file: FileConfig, cli: Overrides) -> Self {
        Self {
            host: cli
                .host
                .or(file.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            agent_port: cli
                .agent_port
                .or(file.agent_port)
                .unwrap_or(Agent::DEFAULT_PORT),
            qsfp_port: cli
                .qsfp_port
                .or(file.qsfp_port)
                .unwrap_or(Qsfp::DEFAULT_PORT),
            timeout: cli
                .timeout_secs
                .or(file.timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
        }
    }
}
