use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed packet: {0}")]
    Malformed(&'static str),

    #[error("Transport unavailable: {0}")]
    TransportUnavailable(String),

    #[error("Failed to send reply: {0}")]
    TransportSend(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),
}
