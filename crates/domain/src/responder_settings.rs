use super::{ReplyCode, TargetDomain};
use std::net::Ipv4Addr;

pub const DEFAULT_DNS_PORT: u16 = 53;
pub const DEFAULT_TTL: u32 = 60;
pub const DEFAULT_RESOLVED_ADDRESS: Ipv4Addr = Ipv4Addr::new(192, 168, 4, 1);

/// Runtime configuration of one responder instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponderSettings {
    pub port: u16,
    pub domain: TargetDomain,
    pub resolved_address: Ipv4Addr,
    pub ttl: u32,
    pub error_reply_code: ReplyCode,
}

impl ResponderSettings {
    pub fn new(port: u16, domain: &str, resolved_address: Ipv4Addr) -> Self {
        Self {
            port,
            domain: TargetDomain::new(domain),
            resolved_address,
            ..Self::default()
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_error_reply_code(mut self, code: ReplyCode) -> Self {
        self.error_reply_code = code;
        self
    }
}

impl Default for ResponderSettings {
    fn default() -> Self {
        Self {
            port: DEFAULT_DNS_PORT,
            domain: TargetDomain::Any,
            resolved_address: DEFAULT_RESOLVED_ADDRESS,
            ttl: DEFAULT_TTL,
            error_reply_code: ReplyCode::NonExistentDomain,
        }
    }
}
