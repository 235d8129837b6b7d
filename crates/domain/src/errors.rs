use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing required query parameter: domain")]
    MissingDomain,

    #[error("Domain not found or no IP address available: {0}")]
    NoAddressFound(String),

    #[error("DNS resolver responded with HTTP {status}")]
    UpstreamStatus { status: u16 },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
