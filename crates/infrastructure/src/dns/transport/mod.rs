pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use srvdial_domain::DiscoveryError;
use std::time::Duration;

pub use tcp::TcpTransport;
pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DiscoveryError>;

    fn protocol_name(&self) -> &'static str;
}
