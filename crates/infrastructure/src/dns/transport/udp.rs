//! UDP listening socket for the responder (RFC 1035 §4.2.1)
//!
//! One non-blocking socket, registered with the tokio reactor so the run loop
//! can await readability. Receives and sends are `try_*` calls and never
//! suspend.

use async_trait::async_trait;
use captive_dns_application::ports::{Datagram, DatagramTransport};
use captive_dns_domain::DomainError;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::{IpAddr, SocketAddr};
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Largest datagram accepted from a client; anything longer is truncated by
/// the kernel and will fail to parse.
pub const MAX_DATAGRAM_SIZE: usize = 4096;

pub struct UdpTransport {
    bind_address: IpAddr,
    socket: Option<UdpSocket>,
}

impl UdpTransport {
    pub fn new(bind_address: IpAddr) -> Self {
        Self {
            bind_address,
            socket: None,
        }
    }

    /// Bound address, once listening. Useful with port 0.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.as_ref().and_then(|s| s.local_addr().ok())
    }

    fn bind(&self, socket_addr: SocketAddr) -> io::Result<UdpSocket> {
        let domain = if socket_addr.is_ipv4() {
            Domain::IPV4
        } else {
            Domain::IPV6
        };
        let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
        if socket_addr.is_ipv6() {
            socket.set_only_v6(false)?;
        }
        socket.set_reuse_address(true)?;
        socket.bind(&socket_addr.into())?;
        socket.set_nonblocking(true)?;
        let std_socket: std::net::UdpSocket = socket.into();
        UdpSocket::from_std(std_socket)
    }
}

#[async_trait]
impl DatagramTransport for UdpTransport {
    fn listen(&mut self, port: u16) -> Result<(), DomainError> {
        let socket_addr = SocketAddr::new(self.bind_address, port);

        // Registering with the reactor needs a runtime on this thread.
        if tokio::runtime::Handle::try_current().is_err() {
            return Err(DomainError::TransportUnavailable(format!(
                "cannot listen on {}: no tokio runtime",
                socket_addr
            )));
        }

        let socket = self.bind(socket_addr).map_err(|e| {
            DomainError::TransportUnavailable(format!("failed to bind {}: {}", socket_addr, e))
        })?;

        debug!(bind_address = %socket_addr, "UDP socket bound");
        self.socket = Some(socket);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(socket) = self.socket.take() {
            debug!(local_addr = ?socket.local_addr().ok(), "UDP socket closed");
        }
    }

    fn receive_next(&self) -> Option<Datagram> {
        let socket = self.socket.as_ref()?;
        let mut recv_buf = [0u8; MAX_DATAGRAM_SIZE];

        loop {
            match socket.try_recv_from(&mut recv_buf) {
                Ok((n, sender)) => return Some(Datagram::new(&recv_buf[..n], sender)),
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => return None,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    // ICMP port-unreachable from an earlier reply surfaces here on some
                    // platforms; the socket stays usable.
                    warn!(error = %e, "UDP recv error");
                    return None;
                }
            }
        }
    }

    fn send(&self, payload: &[u8], destination: SocketAddr) -> Result<(), DomainError> {
        let socket = self
            .socket
            .as_ref()
            .ok_or_else(|| DomainError::TransportSend("socket not listening".to_string()))?;

        let sent = socket.try_send_to(payload, destination).map_err(|e| {
            DomainError::TransportSend(format!("failed to send to {}: {}", destination, e))
        })?;

        if sent != payload.len() {
            return Err(DomainError::TransportSend(format!(
                "short send to {}: {} of {} bytes",
                destination,
                sent,
                payload.len()
            )));
        }
        Ok(())
    }

    async fn readable(&self) -> Result<(), DomainError> {
        let socket = self.socket.as_ref().ok_or_else(|| {
            DomainError::TransportUnavailable("socket not listening".to_string())
        })?;
        socket
            .readable()
            .await
            .map_err(|e| DomainError::TransportUnavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_udp_transport_starts_unbound() {
        let transport = UdpTransport::new(IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert!(transport.local_addr().is_none());
        assert!(transport.receive_next().is_none());
    }

    #[test]
    fn test_listen_outside_runtime_is_unavailable() {
        let mut transport = UdpTransport::new(IpAddr::V4(Ipv4Addr::LOCALHOST));
        let result = transport.listen(0);
        assert!(matches!(result, Err(DomainError::TransportUnavailable(_))));
        assert!(transport.local_addr().is_none());
    }

    #[test]
    fn test_send_before_listen_fails() {
        let transport = UdpTransport::new(IpAddr::V4(Ipv4Addr::LOCALHOST));
        let dest: SocketAddr = "127.0.0.1:9".parse().unwrap();
        assert!(matches!(
            transport.send(&[0u8; 12], dest),
            Err(DomainError::TransportSend(_))
        ));
    }
}
