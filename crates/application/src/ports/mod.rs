mod srv_exchanger;

pub use srv_exchanger::SrvExchanger;

// Re-export for convenience
pub use srvdial_domain::SrvAnswer;
