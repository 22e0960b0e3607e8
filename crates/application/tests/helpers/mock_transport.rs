#![allow(dead_code)]

use async_trait::async_trait;
use captive_dns_application::ports::{Datagram, DatagramTransport};
use captive_dns_domain::DomainError;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MockState {
    inbound: VecDeque<Datagram>,
    sent: Vec<(Vec<u8>, SocketAddr)>,
    listening_port: Option<u16>,
    listen_calls: usize,
    stop_calls: usize,
    fail_listen: bool,
    fail_send: bool,
}

/// In-memory transport. Clones share state, so a test can keep a handle
/// after moving one into the responder.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, payload: &[u8], sender: SocketAddr) {
        self.state
            .lock()
            .unwrap()
            .inbound
            .push_back(Datagram::new(payload, sender));
    }

    pub fn sent(&self) -> Vec<(Vec<u8>, SocketAddr)> {
        self.state.lock().unwrap().sent.clone()
    }

    pub fn pending(&self) -> usize {
        self.state.lock().unwrap().inbound.len()
    }

    pub fn listening_port(&self) -> Option<u16> {
        self.state.lock().unwrap().listening_port
    }

    pub fn listen_calls(&self) -> usize {
        self.state.lock().unwrap().listen_calls
    }

    pub fn stop_calls(&self) -> usize {
        self.state.lock().unwrap().stop_calls
    }

    pub fn set_fail_listen(&self, fail: bool) {
        self.state.lock().unwrap().fail_listen = fail;
    }

    pub fn set_fail_send(&self, fail: bool) {
        self.state.lock().unwrap().fail_send = fail;
    }
}

#[async_trait]
impl DatagramTransport for MockTransport {
    fn listen(&mut self, port: u16) -> Result<(), DomainError> {
        let mut state = self.state.lock().unwrap();
        state.listen_calls += 1;
        if state.fail_listen {
            return Err(DomainError::TransportUnavailable(format!(
                "port {} already in use",
                port
            )));
        }
        state.listening_port = Some(port);
        Ok(())
    }

    fn stop(&mut self) {
        let mut state = self.state.lock().unwrap();
        state.stop_calls += 1;
        state.listening_port = None;
    }

    fn receive_next(&self) -> Option<Datagram> {
        let mut state = self.state.lock().unwrap();
        state.listening_port?;
        state.inbound.pop_front()
    }

    fn send(&self, payload: &[u8], destination: SocketAddr) -> Result<(), DomainError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_send {
            return Err(DomainError::TransportSend("network unreachable".to_string()));
        }
        state.sent.push((payload.to_vec(), destination));
        Ok(())
    }

    async fn readable(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
