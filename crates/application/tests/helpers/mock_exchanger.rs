#![allow(dead_code)]

use async_trait::async_trait;
use srvdial_application::ports::SrvExchanger;
use srvdial_domain::{AddressRecord, DiscoveryError, ResponseRecord, SrvAnswer, SrvRecord};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Scripted exchanger: one programmed outcome per server, every call
/// recorded in order.
#[derive(Clone, Default)]
pub struct MockSrvExchanger {
    outcomes: Arc<RwLock<HashMap<String, Result<SrvAnswer, DiscoveryError>>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockSrvExchanger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answer(&self, server: &str, answer: SrvAnswer) {
        self.outcomes
            .write()
            .unwrap()
            .insert(server.to_string(), Ok(answer));
    }

    pub fn set_error(&self, server: &str, error: DiscoveryError) {
        self.outcomes
            .write()
            .unwrap()
            .insert(server.to_string(), Err(error));
    }

    /// Servers queried so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl SrvExchanger for MockSrvExchanger {
    async fn exchange(&self, server: &str, _service: &str) -> Result<SrvAnswer, DiscoveryError> {
        self.calls.write().unwrap().push(server.to_string());

        self.outcomes
            .read()
            .unwrap()
            .get(server)
            .cloned()
            .unwrap_or_else(|| {
                Err(DiscoveryError::Transport {
                    server: server.to_string(),
                    reason: "No scripted outcome".to_string(),
                })
            })
    }
}

pub fn srv(target: &str, port: u16, ttl: u32) -> ResponseRecord {
    ResponseRecord::Srv(SrvRecord {
        target: target.to_string(),
        port,
        priority: 0,
        weight: 0,
        ttl,
    })
}

pub fn glue(name: &str, ip: &str, ttl: u32) -> ResponseRecord {
    ResponseRecord::Address(AddressRecord {
        name: name.to_string(),
        ip: ip.parse().unwrap(),
        ttl,
    })
}

pub fn answer(answers: Vec<ResponseRecord>, additionals: Vec<ResponseRecord>) -> SrvAnswer {
    SrvAnswer::new(answers, additionals)
}

pub fn empty_answer() -> SrvAnswer {
    SrvAnswer::default()
}
