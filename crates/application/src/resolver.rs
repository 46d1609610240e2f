use crate::ports::SrvExchanger;
use srvdial_domain::{DiscoveryError, Target};
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves a logical service name into dialable endpoints by querying
/// SRV records across an ordered list of DNS servers.
///
/// The server list is kept exactly as given: order expresses priority,
/// duplicates are queried again at their position, nothing is ever
/// reordered. A resolver is immutable after construction and safe to
/// share across concurrent lookups.
pub struct SrvResolver {
    exchanger: Arc<dyn SrvExchanger>,
    servers: Vec<String>,
    default_ttl: u32,
}

impl SrvResolver {
    /// Build a resolver over an explicit `host:port` server list.
    ///
    /// `default_ttl` is the floor in seconds substituted for zero-TTL
    /// records. It is clamped to at least 1 so every produced target
    /// carries a positive TTL.
    pub fn new(exchanger: Arc<dyn SrvExchanger>, servers: Vec<String>, default_ttl: u32) -> Self {
        Self {
            exchanger,
            servers,
            default_ttl: default_ttl.max(1),
        }
    }

    pub fn servers(&self) -> &[String] {
        &self.servers
    }

    pub fn default_ttl(&self) -> u32 {
        self.default_ttl
    }

    /// Resolve `service` into dialable targets.
    ///
    /// Servers are tried strictly in order, one query each, and the
    /// first non-empty answer stops the iteration. A failed server is
    /// skipped, but only the outcome of the last attempt decides the
    /// terminal result: a clean empty answer from a later server
    /// supersedes an earlier failure, and an all-empty lookup reports
    /// [`DiscoveryError::NoSrvEntries`]. A successful lookup always
    /// returns at least one target.
    pub async fn lookup(&self, service: &str) -> Result<Vec<Target>, DiscoveryError> {
        debug!(service = %service, servers = self.servers.len(), "Resolving SRV targets");

        let mut last_attempt_error: Option<DiscoveryError> = None;

        for (position, server) in self.servers.iter().enumerate() {
            match self.query_one(server, service).await {
                Ok(targets) if !targets.is_empty() => {
                    debug!(
                        service = %service,
                        server = %server,
                        position = position,
                        targets = targets.len(),
                        "SRV answer accepted"
                    );
                    return Ok(targets);
                }
                Ok(_) => {
                    debug!(service = %service, server = %server, position = position, "Empty SRV answer");
                    last_attempt_error = None;
                }
                Err(e) => {
                    warn!(service = %service, server = %server, position = position, error = %e, "Failing over");
                    last_attempt_error = Some(e);
                }
            }
        }

        if let Some(error) = last_attempt_error {
            return Err(error);
        }
        Err(DiscoveryError::NoSrvEntries(service.to_string()))
    }

    /// Query one server and project its answer into targets.
    ///
    /// An empty answer section is a valid outcome and yields an empty
    /// list; exchange failures propagate as this server's outcome.
    async fn query_one(&self, server: &str, service: &str) -> Result<Vec<Target>, DiscoveryError> {
        let answer = self.exchanger.exchange(server, service).await?;
        if answer.is_empty() {
            return Ok(Vec::new());
        }
        Ok(answer.to_targets(self.default_ttl))
    }
}
