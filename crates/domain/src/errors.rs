use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DiscoveryError {
    #[error("Failed to read resolver config {path}: {reason}")]
    ConfigRead { path: String, reason: String },

    #[error("Failed to parse resolver config {path}: {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid server address '{server}': {reason}")]
    InvalidServerAddress { server: String, reason: String },

    #[error("Invalid service name '{name}': {reason}")]
    InvalidServiceName { name: String, reason: String },

    #[error("Failed to build SRV query: {0}")]
    QueryBuild(String),

    #[error("Transport timeout waiting on {server}")]
    TransportTimeout { server: String },

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Invalid DNS response from {server}: {reason}")]
    InvalidResponse { server: String, reason: String },

    #[error("Server {server} answered {rcode}")]
    ServerFailure { server: String, rcode: String },

    #[error("No SRV entries found for {0}")]
    NoSrvEntries(String),
}
