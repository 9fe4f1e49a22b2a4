use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid SCION address: {0}")]
    InvalidScionAddress(String),

    #[error("Invalid attribute: {0}")]
    InvalidAttribute(String),

    #[error("Unsupported host type: {0}")]
    UnsupportedHost(String),

    #[error("ISD cannot be encoded ({0})")]
    IsdNotEncodable(String),

    #[error("ASN cannot be encoded ({0})")]
    AsnNotEncodable(String),

    #[error("Invalid translation prefix: {0}")]
    InvalidPrefix(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("No next handler after {0}")]
    NoNextHandler(&'static str),

    #[error("Failed to write response: {0}")]
    WriteFailed(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport error talking to {server}: {reason}")]
    TransportError { server: String, reason: String },

    #[error("All upstream servers are unreachable")]
    TransportAllServersUnreachable,
}

impl DomainError {
    /// Range errors are recovered locally by falling back to ordinary resolution.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            DomainError::IsdNotEncodable(_) | DomainError::AsnNotEncodable(_)
        )
    }
}
