#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA, SRV};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// What the mock answers with: SRV records as `(target, port, ttl)`,
/// glue address records as `(name, ip, ttl)`.
#[derive(Clone)]
pub struct SrvScript {
    pub records: Vec<(String, u16, u32)>,
    pub glue: Vec<(String, IpAddr, u32)>,
    pub rcode: ResponseCode,
    /// Answer truncated-and-empty over UDP and serve the real response
    /// over TCP on the same port.
    pub truncate_udp: bool,
}

impl Default for SrvScript {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            glue: Vec::new(),
            rcode: ResponseCode::NoError,
            truncate_udp: false,
        }
    }
}

impl SrvScript {
    pub fn with_srv(mut self, target: &str, port: u16, ttl: u32) -> Self {
        self.records.push((target.to_string(), port, ttl));
        self
    }

    pub fn with_glue(mut self, name: &str, ip: &str, ttl: u32) -> Self {
        self.glue.push((name.to_string(), ip.parse().unwrap(), ttl));
        self
    }

    pub fn with_rcode(mut self, rcode: ResponseCode) -> Self {
        self.rcode = rcode;
        self
    }

    pub fn truncated_over_udp(mut self) -> Self {
        self.truncate_udp = true;
        self
    }
}

/// UDP (and, for truncation scripts, TCP) server speaking real
/// hickory-encoded DNS on an ephemeral loopback port.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(script: SrvScript) -> Result<(Self, SocketAddr), std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let local_addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        if script.truncate_udp {
            let listener = TcpListener::bind(local_addr).await?;
            let tcp_script = script.clone();
            tokio::spawn(async move {
                while let Ok((mut stream, _)) = listener.accept().await {
                    let mut len_buf = [0u8; 2];
                    if stream.read_exact(&mut len_buf).await.is_err() {
                        continue;
                    }
                    let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                    if stream.read_exact(&mut query).await.is_err() {
                        continue;
                    }

                    let response = build_response(&tcp_script, &query, false);
                    let len = (response.len() as u16).to_be_bytes();
                    let _ = stream.write_all(&len).await;
                    let _ = stream.write_all(&response).await;
                }
            });
        }

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let response = build_response(&script, &buf[..len], script.truncate_udp);
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                }
            }
        });

        Ok((
            Self {
                addr: local_addr,
                shutdown_tx: Some(shutdown_tx),
            },
            local_addr,
        ))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn build_response(script: &SrvScript, query_bytes: &[u8], truncated: bool) -> Vec<u8> {
    let query = match Message::from_vec(query_bytes) {
        Ok(message) => message,
        Err(_) => return Vec::new(),
    };

    let mut response = Message::new();
    response.set_id(query.id());
    response.set_message_type(MessageType::Response);
    response.set_op_code(OpCode::Query);
    response.set_recursion_desired(true);
    response.set_recursion_available(true);
    response.set_response_code(script.rcode);

    let qname = match query.queries().first() {
        Some(q) => {
            let name = q.name().clone();
            response.add_query(q.clone());
            name
        }
        None => Name::root(),
    };

    if truncated {
        response.set_truncated(true);
    } else {
        for (target, port, ttl) in &script.records {
            let target_name = fqdn(target);
            response.add_answer(Record::from_rdata(
                qname.clone(),
                *ttl,
                RData::SRV(SRV::new(0, 0, *port, target_name)),
            ));
        }

        for (name, ip, ttl) in &script.glue {
            let rdata = match ip {
                IpAddr::V4(v4) => RData::A(A(*v4)),
                IpAddr::V6(v6) => RData::AAAA(AAAA(*v6)),
            };
            response.add_additional(Record::from_rdata(fqdn(name), *ttl, rdata));
        }
    }

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    if response.emit(&mut encoder).is_err() {
        return Vec::new();
    }
    buf
}

fn fqdn(name: &str) -> Name {
    let dotted = if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    };
    Name::from_str(&dotted).unwrap_or_else(|_| Name::root())
}
