//! srvdial Application Layer
pub mod ports;
pub mod resolver;

pub use ports::SrvExchanger;
pub use resolver::SrvResolver;
