//! resolv.conf reader
//!
//! Turns the system resolver configuration into the `host:port` server
//! list the resolver iterates. Parsing itself is delegated to the
//! `resolv-conf` crate.

use resolv_conf::ScopedIp;
use srvdial_domain::DiscoveryError;
use tracing::debug;

pub const DEFAULT_RESOLV_CONF_PATH: &str = "/etc/resolv.conf";

const DNS_PORT: u16 = 53;

/// Read `nameserver` entries from a resolv.conf-style file and render
/// them as `host:port` entries, in file order. IPv6 servers are
/// bracketed. An empty `path` means the system default
/// [`DEFAULT_RESOLV_CONF_PATH`].
pub fn read_nameservers(path: &str) -> Result<Vec<String>, DiscoveryError> {
    let path = if path.is_empty() {
        DEFAULT_RESOLV_CONF_PATH
    } else {
        path
    };

    let contents = std::fs::read_to_string(path).map_err(|e| DiscoveryError::ConfigRead {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    let config =
        resolv_conf::Config::parse(&contents).map_err(|e| DiscoveryError::ConfigParse {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

    let servers: Vec<String> = config
        .nameservers
        .iter()
        .map(|nameserver| match nameserver {
            ScopedIp::V4(ip) => format!("{}:{}", ip, DNS_PORT),
            ScopedIp::V6(ip, _) => format!("[{}]:{}", ip, DNS_PORT),
        })
        .collect();

    if servers.is_empty() {
        return Err(DiscoveryError::ConfigError(format!(
            "No nameserver entries in {}",
            path
        )));
    }

    debug!(path = %path, servers = servers.len(), "Nameservers loaded from resolv.conf");

    Ok(servers)
}
