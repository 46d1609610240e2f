//! srvdial Domain Layer
pub mod answer;
pub mod config;
pub mod errors;
pub mod target;

pub use answer::{AddressRecord, ResponseRecord, SrvAnswer, SrvRecord};
pub use config::DiscoveryConfig;
pub use errors::DiscoveryError;
pub use target::Target;
