use crate::errors::DiscoveryError;
use serde::{Deserialize, Serialize};

/// Discovery settings, usually loaded from a TOML file:
///
/// ```toml
/// [discovery]
/// servers = ["10.0.0.1:53", "10.0.0.2:53"]
/// default_ttl = 30
/// query_timeout_ms = 2000
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscoveryConfig {
    /// DNS servers tried in order, as `host:port` entries. Order
    /// expresses priority and is kept exactly as written.
    #[serde(default)]
    pub servers: Vec<String>,

    /// Floor TTL in seconds substituted when a record carries TTL 0.
    #[serde(default = "default_ttl")]
    pub default_ttl: u32,

    /// Per-exchange timeout enforced by the transport.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

fn default_ttl() -> u32 {
    30
}

fn default_query_timeout_ms() -> u64 {
    2000
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            servers: Vec::new(),
            default_ttl: default_ttl(),
            query_timeout_ms: default_query_timeout_ms(),
        }
    }
}

impl DiscoveryConfig {
    /// Load settings from a TOML file and validate them.
    pub fn load(path: &str) -> Result<Self, DiscoveryError> {
        let contents = std::fs::read_to_string(path).map_err(|e| DiscoveryError::ConfigRead {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        let file: ConfigFile =
            toml::from_str(&contents).map_err(|e| DiscoveryError::ConfigParse {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        let config = file.discovery;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DiscoveryError> {
        if self.default_ttl == 0 {
            return Err(DiscoveryError::ConfigError(
                "default_ttl cannot be 0".to_string(),
            ));
        }

        if self.query_timeout_ms == 0 {
            return Err(DiscoveryError::ConfigError(
                "query_timeout_ms cannot be 0".to_string(),
            ));
        }

        if self.servers.is_empty() {
            return Err(DiscoveryError::ConfigError(
                "No DNS servers configured".to_string(),
            ));
        }

        for server in &self.servers {
            match server.rsplit_once(':') {
                Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => {}
                _ => {
                    return Err(DiscoveryError::ConfigError(format!(
                        "Server '{}' must be a host:port entry",
                        server
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Top-level wrapper so settings live under `[discovery]`.
#[derive(Debug, Default, Deserialize, Serialize)]
struct ConfigFile {
    #[serde(default)]
    discovery: DiscoveryConfig,
}
