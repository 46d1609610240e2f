//! srvdial Infrastructure Layer
//!
//! Adapters behind the application ports: the `hickory-proto` SRV
//! exchanger with its UDP/TCP transports, the resolv.conf reader, and
//! the builder that wires everything into an [`SrvResolver`].
//!
//! [`SrvResolver`]: srvdial_application::SrvResolver

pub mod dns;
pub mod system;

pub use dns::builder::{from_config, SrvResolverBuilder};
pub use dns::exchanger::HickoryExchanger;
