use crate::dns::exchanger::{HickoryExchanger, DEFAULT_QUERY_TIMEOUT_MS};
use crate::system;
use srvdial_application::SrvResolver;
use srvdial_domain::{DiscoveryConfig, DiscoveryError};
use std::sync::Arc;
use tracing::info;

/// Wires the hickory exchanger into an application [`SrvResolver`].
pub struct SrvResolverBuilder {
    default_ttl: u32,
    query_timeout_ms: u64,
}

impl SrvResolverBuilder {
    /// `default_ttl` is the floor, in seconds, substituted for zero-TTL
    /// records.
    pub fn new(default_ttl: u32) -> Self {
        Self {
            default_ttl,
            query_timeout_ms: DEFAULT_QUERY_TIMEOUT_MS,
        }
    }

    /// Override the per-exchange timeout enforced by the transports.
    pub fn query_timeout_ms(mut self, query_timeout_ms: u64) -> Self {
        self.query_timeout_ms = query_timeout_ms;
        self
    }

    /// Build a resolver over an explicit `host:port` server list.
    pub fn with_servers(self, servers: Vec<String>) -> SrvResolver {
        info!(
            servers = servers.len(),
            default_ttl = self.default_ttl,
            query_timeout_ms = self.query_timeout_ms,
            "Building SRV resolver"
        );

        SrvResolver::new(
            Arc::new(HickoryExchanger::new(self.query_timeout_ms)),
            servers,
            self.default_ttl,
        )
    }

    /// Build a resolver from the `nameserver` entries of a
    /// resolv.conf-style file; an empty `path` means the system default
    /// `/etc/resolv.conf`.
    pub fn from_resolv_conf(self, path: &str) -> Result<SrvResolver, DiscoveryError> {
        let servers = system::read_nameservers(path)?;
        Ok(self.with_servers(servers))
    }
}

/// Build a resolver straight from a [`DiscoveryConfig`], validating it
/// first.
pub fn from_config(config: &DiscoveryConfig) -> Result<SrvResolver, DiscoveryError> {
    config.validate()?;
    Ok(SrvResolverBuilder::new(config.default_ttl)
        .query_timeout_ms(config.query_timeout_ms)
        .with_servers(config.servers.clone()))
}
