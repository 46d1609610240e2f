use crate::dns::message_builder::MessageBuilder;
use crate::dns::response_parser::ResponseParser;
use crate::dns::transport::{DnsTransport, TcpTransport, UdpTransport};
use async_trait::async_trait;
use srvdial_application::ports::SrvExchanger;
use srvdial_domain::{DiscoveryError, SrvAnswer};
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tracing::debug;

pub const DEFAULT_QUERY_TIMEOUT_MS: u64 = 2000;

/// SRV exchanger over `hickory-proto`.
///
/// Queries go out over UDP; a truncated (TC bit) response triggers one
/// TCP retry within whatever remains of the timeout. The server address is
/// parsed per call so a malformed entry counts as that server's failure
/// and participates in fallback.
pub struct HickoryExchanger {
    query_timeout: Duration,
}

impl HickoryExchanger {
    pub fn new(query_timeout_ms: u64) -> Self {
        Self {
            query_timeout: Duration::from_millis(query_timeout_ms),
        }
    }
}

impl Default for HickoryExchanger {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY_TIMEOUT_MS)
    }
}

#[async_trait]
impl SrvExchanger for HickoryExchanger {
    async fn exchange(&self, server: &str, service: &str) -> Result<SrvAnswer, DiscoveryError> {
        let server_addr: SocketAddr =
            server
                .parse()
                .map_err(|e: std::net::AddrParseError| DiscoveryError::InvalidServerAddress {
                    server: server.to_string(),
                    reason: e.to_string(),
                })?;

        let start = Instant::now();
        let query_bytes = MessageBuilder::build_srv_query(service)?;

        let udp = UdpTransport::new(server_addr);
        let response = udp.send(&query_bytes, self.query_timeout).await?;
        let mut decoded = ResponseParser::parse(server, &response.bytes)?;

        if decoded.truncated {
            debug!(
                server = %server,
                service = %service,
                "Response truncated (TC bit), retrying via TCP"
            );

            let remaining = self
                .query_timeout
                .checked_sub(start.elapsed())
                .unwrap_or(Duration::from_millis(500));

            let tcp = TcpTransport::new(server_addr);
            let tcp_response = tcp.send(&query_bytes, remaining).await?;
            decoded = ResponseParser::parse(server, &tcp_response.bytes)?;
        }

        if decoded.is_server_failure() {
            return Err(DiscoveryError::ServerFailure {
                server: server.to_string(),
                rcode: ResponseParser::rcode_to_status(decoded.rcode).to_string(),
            });
        }

        Ok(decoded.answer)
    }
}
