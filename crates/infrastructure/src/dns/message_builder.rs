//! SRV Query Builder
//!
//! Constructs the SRV question in wire format using `hickory-proto`,
//! giving full control over the query the exchanger sends.

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use srvdial_domain::DiscoveryError;
use std::str::FromStr;

/// Builds SRV query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build an SRV query for `service` and serialize it to wire bytes.
    ///
    /// The name is fully qualified (root dot appended when absent) and
    /// the query carries:
    /// - a random ID for request/response matching
    /// - the RD (Recursion Desired) flag
    /// - a single IN-class SRV question
    pub fn build_srv_query(service: &str) -> Result<Vec<u8>, DiscoveryError> {
        if service.is_empty() {
            return Err(DiscoveryError::InvalidServiceName {
                name: service.to_string(),
                reason: "empty name".to_string(),
            });
        }

        let fqdn = if service.ends_with('.') {
            service.to_string()
        } else {
            format!("{}.", service)
        };

        let name = Name::from_str(&fqdn).map_err(|e| DiscoveryError::InvalidServiceName {
            name: service.to_string(),
            reason: e.to_string(),
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordType::SRV);
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new();
        message.set_id(fastrand::u16(..));
        message.set_message_type(MessageType::Query);
        message.set_op_code(OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        Self::serialize_message(&message)
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DiscoveryError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message
            .emit(&mut encoder)
            .map_err(|e| DiscoveryError::QueryBuild(e.to_string()))?;

        Ok(buf)
    }
}
