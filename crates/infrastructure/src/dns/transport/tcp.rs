//! TCP Transport for SRV queries (RFC 1035 §4.2.2)
//!
//! Used when a UDP response comes back truncated. Messages carry a
//! 2-byte big-endian length prefix in both directions.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use srvdial_domain::DiscoveryError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

const MAX_TCP_MESSAGE_SIZE: usize = 65535;

/// DNS over TCP transport
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn timeout_error(&self) -> DiscoveryError {
        DiscoveryError::TransportTimeout {
            server: self.server_addr.to_string(),
        }
    }

    fn transport_error(&self, reason: String) -> DiscoveryError {
        DiscoveryError::Transport {
            server: self.server_addr.to_string(),
            reason,
        }
    }

    async fn connect(&self, timeout: Duration) -> Result<TcpStream, DiscoveryError> {
        let stream = tokio::time::timeout(timeout, TcpStream::connect(self.server_addr))
            .await
            .map_err(|_| self.timeout_error())?
            .map_err(|e| self.transport_error(format!("Failed to connect: {}", e)))?;

        stream
            .set_nodelay(true)
            .map_err(|e| self.transport_error(format!("Failed to set TCP_NODELAY: {}", e)))?;

        Ok(stream)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DiscoveryError> {
        let mut stream = self.connect(timeout).await?;

        tokio::time::timeout(timeout, send_with_length_prefix(&mut stream, message_bytes))
            .await
            .map_err(|_| self.timeout_error())?
            .map_err(|e| self.transport_error(e))?;

        debug!(
            server = %self.server_addr,
            message_len = message_bytes.len(),
            "TCP query sent"
        );

        let response_bytes = tokio::time::timeout(timeout, read_with_length_prefix(&mut stream))
            .await
            .map_err(|_| self.timeout_error())?
            .map_err(|e| self.transport_error(e))?;

        debug!(
            server = %self.server_addr,
            response_len = response_bytes.len(),
            "TCP response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes,
            protocol_used: "TCP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}

pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), String>
where
    S: AsyncWriteExt + Unpin,
{
    let length = message_bytes.len() as u16;

    stream
        .write_all(&length.to_be_bytes())
        .await
        .map_err(|e| format!("Failed to write length prefix: {}", e))?;
    stream
        .write_all(message_bytes)
        .await
        .map_err(|e| format!("Failed to write DNS message: {}", e))?;
    stream
        .flush()
        .await
        .map_err(|e| format!("Failed to flush stream: {}", e))?;

    Ok(())
}

pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> Result<Vec<u8>, String>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream
        .read_exact(&mut len_buf)
        .await
        .map_err(|e| format!("Failed to read response length: {}", e))?;

    let response_len = u16::from_be_bytes(len_buf) as usize;

    if response_len > MAX_TCP_MESSAGE_SIZE {
        return Err(format!(
            "Response too large: {} bytes (max {})",
            response_len, MAX_TCP_MESSAGE_SIZE
        ));
    }

    let mut response = vec![0u8; response_len];
    stream
        .read_exact(&mut response)
        .await
        .map_err(|e| format!("Failed to read response body: {}", e))?;

    Ok(response)
}
