use captive_dns_domain::{DomainError, ReplyCode, ResponderSettings, TargetDomain};
use std::net::{Ipv4Addr, SocketAddr};
use tracing::{debug, info, warn};

use crate::ports::DatagramTransport;
use crate::use_cases::{DatagramOutcome, HandleDatagramUseCase, ResponseKind};

/// Outcome counters since the responder was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponderStats {
    pub answered: u64,
    pub rejected: u64,
    pub ignored: u64,
    pub dropped: u64,
    pub send_failures: u64,
}

impl ResponderStats {
    fn record(&mut self, kind: ResponseKind) {
        let counter = match kind {
            ResponseKind::Answered => &mut self.answered,
            ResponseKind::Rejected => &mut self.rejected,
            ResponseKind::Ignored => &mut self.ignored,
            ResponseKind::Dropped => &mut self.dropped,
        };
        *counter = counter.saturating_add(1);
    }

    pub fn total(&self) -> u64 {
        self.answered
            .saturating_add(self.rejected)
            .saturating_add(self.ignored)
            .saturating_add(self.dropped)
    }
}

/// Captive-portal DNS responder: answers one domain (or all of them) with a
/// single IPv4 address and everything else with a configurable error code.
pub struct DnsResponder<T: DatagramTransport> {
    transport: T,
    handler: HandleDatagramUseCase,
    stats: ResponderStats,
    listening: bool,
}

impl<T: DatagramTransport> DnsResponder<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            handler: HandleDatagramUseCase::new(ResponderSettings::default()),
            stats: ResponderStats::default(),
            listening: false,
        }
    }

    pub fn set_error_reply_code(&mut self, code: ReplyCode) {
        self.handler.settings_mut().error_reply_code = code;
    }

    pub fn set_ttl(&mut self, ttl: u32) {
        self.handler.settings_mut().ttl = ttl;
    }

    /// Stores the target and binds the transport on `port`.
    ///
    /// A bind failure is returned as-is; nothing is retried.
    pub fn start(
        &mut self,
        port: u16,
        domain: &str,
        resolved_address: Ipv4Addr,
    ) -> Result<(), DomainError> {
        {
            let settings = self.handler.settings_mut();
            settings.port = port;
            settings.domain = TargetDomain::new(domain);
            settings.resolved_address = resolved_address;
        }

        if self.listening {
            self.transport.stop();
            self.listening = false;
        }

        self.transport.listen(port)?;
        self.listening = true;

        let settings = self.handler.settings();
        info!(
            port,
            domain = %settings.domain,
            resolved_address = %settings.resolved_address,
            ttl = settings.ttl,
            error_reply_code = %settings.error_reply_code,
            "DNS responder listening"
        );
        Ok(())
    }

    pub fn stop(&mut self) {
        if !self.listening {
            return;
        }
        self.transport.stop();
        self.listening = false;
        info!(
            answered = self.stats.answered,
            rejected = self.stats.rejected,
            ignored = self.stats.ignored,
            dropped = self.stats.dropped,
            send_failures = self.stats.send_failures,
            "DNS responder stopped"
        );
    }

    /// Handles at most one pending datagram end to end.
    ///
    /// Returns `None` when nothing was pending.
    pub fn process_next_request(&mut self) -> Option<ResponseKind> {
        if !self.listening {
            return None;
        }
        let datagram = self.transport.receive_next()?;

        let outcome = self.handler.execute(&datagram.payload);
        let kind = outcome.kind();

        match &outcome {
            DatagramOutcome::Answered(reply) | DatagramOutcome::Rejected(reply) => {
                debug!(
                    sender = %datagram.sender,
                    outcome = kind.as_str(),
                    bytes = reply.len(),
                    "Replying to DNS query"
                );
                self.send_reply(reply, datagram.sender);
            }
            DatagramOutcome::Ignored => {
                debug!(sender = %datagram.sender, "Ignoring non-query datagram");
            }
            DatagramOutcome::Dropped(e) => {
                debug!(
                    sender = %datagram.sender,
                    bytes = datagram.payload.len(),
                    error = %e,
                    "Dropping malformed datagram"
                );
            }
        }

        self.stats.record(kind);
        Some(kind)
    }

    fn send_reply(&mut self, reply: &[u8], destination: SocketAddr) {
        if let Err(e) = self.transport.send(reply, destination) {
            self.stats.send_failures = self.stats.send_failures.saturating_add(1);
            warn!(destination = %destination, error = %e, "Failed to send DNS reply");
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn settings(&self) -> &ResponderSettings {
        self.handler.settings()
    }

    pub fn stats(&self) -> ResponderStats {
        self.stats
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}
