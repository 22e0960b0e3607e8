use captive_dns_application::ports::DatagramTransport;
use captive_dns_application::{DnsResponder, ResponderStats};
use captive_dns_domain::Config;
use captive_dns_infrastructure::dns::UdpTransport;
use std::future::Future;
use tracing::{error, info};

pub async fn run_dns_responder(config: &Config) -> anyhow::Result<ResponderStats> {
    let settings = config.responder_settings();
    let mut responder = DnsResponder::new(UdpTransport::new(config.server.bind_address));
    responder.set_ttl(settings.ttl);
    responder.set_error_reply_code(settings.error_reply_code);
    responder.start(
        settings.port,
        &config.responder.domain,
        settings.resolved_address,
    )?;

    info!(
        bind_address = %config.server.bind_address,
        port = settings.port,
        "DNS responder ready, press Ctrl-C to stop"
    );

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
        }
    };

    serve(&mut responder, shutdown).await
}

/// Drains pending datagrams on every readiness event until `shutdown`
/// resolves, then stops the responder.
pub async fn serve<T, F>(
    responder: &mut DnsResponder<T>,
    shutdown: F,
) -> anyhow::Result<ResponderStats>
where
    T: DatagramTransport,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        let ready = tokio::select! {
            _ = &mut shutdown => None,
            result = responder.transport().readable() => Some(result),
        };

        match ready {
            None => {
                info!("Shutdown signal received");
                break;
            }
            Some(Err(e)) => {
                error!(error = %e, "DNS socket no longer readable");
                responder.stop();
                return Err(e.into());
            }
            Some(Ok(())) => {}
        }

        while responder.process_next_request().is_some() {}
    }

    responder.stop();
    Ok(responder.stats())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};
    use std::time::Duration;
    use tokio::net::UdpSocket;
    use tokio::sync::oneshot;

    fn query(domain: &str) -> Vec<u8> {
        let mut packet = vec![0x12, 0x34, 0x01, 0x00, 0x00, 0x01, 0, 0, 0, 0, 0, 0];
        for label in domain.split('.') {
            packet.push(label.len() as u8);
            packet.extend_from_slice(label.as_bytes());
        }
        packet.extend_from_slice(&[0x00, 0x00, 0x01, 0x00, 0x01]);
        packet
    }

    #[tokio::test]
    async fn test_serve_answers_until_shutdown() {
        let mut responder = DnsResponder::new(UdpTransport::new(IpAddr::V4(Ipv4Addr::LOCALHOST)));
        responder
            .start(0, "portal.lan", Ipv4Addr::new(10, 0, 0, 1))
            .unwrap();
        let server_addr = responder.transport().local_addr().unwrap();

        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let (stop_tx, stop_rx) = oneshot::channel::<()>();

        let client_task = tokio::spawn(async move {
            client.send_to(&query("portal.lan"), server_addr).await.unwrap();
            let mut buf = [0u8; 512];
            let (n, _) = tokio::time::timeout(Duration::from_secs(2), client.recv_from(&mut buf))
                .await
                .unwrap()
                .unwrap();
            stop_tx.send(()).unwrap();
            buf[..n].to_vec()
        });

        let stats = serve(&mut responder, async {
            let _ = stop_rx.await;
        })
        .await
        .unwrap();

        let reply = client_task.await.unwrap();
        assert_eq!(&reply[reply.len() - 4..], &[10, 0, 0, 1]);
        assert_eq!(stats.answered, 1);
        assert!(!responder.is_listening());
    }

    #[tokio::test]
    async fn test_serve_fails_when_not_listening() {
        let mut responder = DnsResponder::new(UdpTransport::new(IpAddr::V4(Ipv4Addr::LOCALHOST)));
        let result = serve(&mut responder, std::future::pending::<()>()).await;
        assert!(result.is_err());
    }
}
