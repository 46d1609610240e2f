use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use srvdial_domain::{AddressRecord, DiscoveryError, ResponseRecord, SrvAnswer, SrvRecord};
use std::net::IpAddr;
use tracing::debug;

/// Decoded SRV response plus the wire-level facts the exchanger acts on.
#[derive(Debug, Clone)]
pub struct DecodedResponse {
    pub answer: SrvAnswer,

    pub rcode: ResponseCode,

    pub truncated: bool,
}

impl DecodedResponse {
    /// NXDOMAIN and a clean zero-answer response both mean "no SRV
    /// entries here"; every other non-zero rcode is a server failure.
    pub fn is_server_failure(&self) -> bool {
        !matches!(self.rcode, ResponseCode::NoError | ResponseCode::NXDomain)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decode wire bytes from `server` into domain records.
    ///
    /// SRV records come from the answer section, address records from
    /// the additional section; both keep wire order. Record kinds the
    /// resolver does not consume are tagged and skipped downstream.
    pub fn parse(server: &str, response_bytes: &[u8]) -> Result<DecodedResponse, DiscoveryError> {
        let message =
            Message::from_vec(response_bytes).map_err(|e| DiscoveryError::InvalidResponse {
                server: server.to_string(),
                reason: e.to_string(),
            })?;

        let rcode = message.response_code();
        let truncated = message.truncated();

        let answers: Vec<ResponseRecord> = message.answers().iter().map(map_record).collect();
        let additionals: Vec<ResponseRecord> =
            message.additionals().iter().map(map_record).collect();

        debug!(
            server = %server,
            rcode = ?rcode,
            answers = answers.len(),
            additionals = additionals.len(),
            truncated = truncated,
            "SRV response parsed"
        );

        Ok(DecodedResponse {
            answer: SrvAnswer::new(answers, additionals),
            rcode,
            truncated,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

fn map_record(record: &Record) -> ResponseRecord {
    match record.data() {
        RData::SRV(srv) => ResponseRecord::Srv(SrvRecord {
            target: strip_root_dot(srv.target().to_utf8()),
            port: srv.port(),
            priority: srv.priority(),
            weight: srv.weight(),
            ttl: record.ttl(),
        }),
        RData::A(a) => ResponseRecord::Address(AddressRecord {
            name: strip_root_dot(record.name().to_utf8()),
            ip: IpAddr::V4(a.0),
            ttl: record.ttl(),
        }),
        RData::AAAA(aaaa) => ResponseRecord::Address(AddressRecord {
            name: strip_root_dot(record.name().to_utf8()),
            ip: IpAddr::V6(aaaa.0),
            ttl: record.ttl(),
        }),
        other => ResponseRecord::Other {
            rtype: u16::from(other.record_type()),
        },
    }
}

/// Wire names come back fully qualified; dial addresses drop the root
/// dot so both sides of the hostname-to-IP join agree.
fn strip_root_dot(mut name: String) -> String {
    if name.len() > 1 && name.ends_with('.') {
        name.pop();
    }
    name
}
