use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// One dialable endpoint produced by an SRV lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// `host:port` or `ip:port`, directly usable by a dialer.
    pub dial_addr: String,

    /// How long this endpoint may be used before the caller should
    /// re-resolve. Always greater than zero.
    pub ttl: Duration,
}

impl Target {
    pub fn new(dial_addr: impl Into<String>, ttl: Duration) -> Self {
        Self {
            dial_addr: dial_addr.into(),
            ttl,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ttl {}s)", self.dial_addr, self.ttl.as_secs())
    }
}
