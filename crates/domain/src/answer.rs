use crate::target::Target;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// SRV record from the answer section of a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrvRecord {
    /// Hostname the service runs on, without the trailing root dot.
    pub target: String,

    pub port: u16,

    pub priority: u16,

    pub weight: u16,

    /// TTL in seconds as carried on the wire. Zero is possible and gets
    /// floored during projection.
    pub ttl: u32,
}

/// Address record (A or AAAA) from the additional section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// Owner hostname, without the trailing root dot.
    pub name: String,

    pub ip: IpAddr,

    pub ttl: u32,
}

/// A resource record seen in an SRV response, tagged by kind.
///
/// Kinds the resolver does not consume are still represented so the
/// projection skips them through an exhaustive match rather than a
/// runtime type test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseRecord {
    Srv(SrvRecord),
    Address(AddressRecord),
    Other { rtype: u16 },
}

/// Decoded SRV response from one server: the answer section plus the
/// additional section, both in wire order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrvAnswer {
    pub answers: Vec<ResponseRecord>,
    pub additionals: Vec<ResponseRecord>,
}

impl SrvAnswer {
    pub fn new(answers: Vec<ResponseRecord>, additionals: Vec<ResponseRecord>) -> Self {
        Self {
            answers,
            additionals,
        }
    }

    /// True when the answer section carries no records at all.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Hostname to IP map built from address records in the additional
    /// section. On duplicate names the later record wins.
    pub fn address_map(&self) -> HashMap<&str, IpAddr> {
        self.additionals
            .iter()
            .filter_map(|record| match record {
                ResponseRecord::Address(addr) => Some((addr.name.as_str(), addr.ip)),
                ResponseRecord::Srv(_) | ResponseRecord::Other { .. } => None,
            })
            .collect()
    }

    /// Project the answer into dialable targets.
    ///
    /// Walks the answer section in order. Each SRV record becomes one
    /// target: the dial address inlines the additional-section IP when
    /// the SRV target hostname has one, otherwise the hostname is used
    /// verbatim. A record TTL of zero falls back to `default_ttl`
    /// seconds. Every other record kind is skipped. Order is preserved
    /// and nothing is deduplicated.
    pub fn to_targets(&self, default_ttl: u32) -> Vec<Target> {
        let addresses = self.address_map();
        let mut targets = Vec::with_capacity(self.answers.len());

        for record in &self.answers {
            match record {
                ResponseRecord::Srv(srv) => {
                    let dial_addr = match addresses.get(srv.target.as_str()) {
                        Some(ip) => SocketAddr::new(*ip, srv.port).to_string(),
                        None => format!("{}:{}", srv.target, srv.port),
                    };
                    let ttl_secs = if srv.ttl == 0 { default_ttl } else { srv.ttl };
                    targets.push(Target {
                        dial_addr,
                        ttl: Duration::from_secs(u64::from(ttl_secs)),
                    });
                }
                ResponseRecord::Address(_) | ResponseRecord::Other { .. } => {}
            }
        }

        targets
    }
}
