use async_trait::async_trait;
use srvdial_domain::{DiscoveryError, SrvAnswer};

/// Port for one SRV exchange with one DNS server.
///
/// Implementations own message construction, transport and parsing,
/// including whatever timeout they enforce per exchange. The resolver
/// never retries a server: whatever a single call returns is that
/// server's outcome for the whole lookup.
#[async_trait]
pub trait SrvExchanger: Send + Sync {
    /// Send an SRV question for `service` to `server` (a `host:port`
    /// string) and decode the response.
    ///
    /// A well-formed response with no answer records is `Ok` with an
    /// empty [`SrvAnswer`], not an error.
    async fn exchange(&self, server: &str, service: &str) -> Result<SrvAnswer, DiscoveryError>;
}
