use async_trait::async_trait;
use captive_dns_domain::DomainError;
use std::net::SocketAddr;

/// One received UDP payload, sized exactly to what arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datagram {
    pub payload: Vec<u8>,
    pub sender: SocketAddr,
}

impl Datagram {
    pub fn new(payload: impl Into<Vec<u8>>, sender: SocketAddr) -> Self {
        Self {
            payload: payload.into(),
            sender,
        }
    }
}

/// UDP socket boundary of the responder.
///
/// `receive_next` and `send` never block: the responder is poll-driven and
/// only `readable` may wait.
#[async_trait]
pub trait DatagramTransport: Send + Sync {
    /// Binds the listening socket. Fails with `TransportUnavailable`.
    fn listen(&mut self, port: u16) -> Result<(), DomainError>;

    fn stop(&mut self);

    /// Next pending datagram, or `None` when nothing is queued or the
    /// transport is stopped.
    fn receive_next(&self) -> Option<Datagram>;

    fn send(&self, payload: &[u8], destination: SocketAddr) -> Result<(), DomainError>;

    /// Resolves once a datagram may be pending.
    async fn readable(&self) -> Result<(), DomainError>;
}
