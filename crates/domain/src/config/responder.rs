use crate::responder_settings::{DEFAULT_RESOLVED_ADDRESS, DEFAULT_TTL};
use crate::target_domain::WILDCARD_DOMAIN;
use crate::ReplyCode;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResponderConfig {
    /// Domain to answer for, or `*` for every name.
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Address placed in every A answer.
    #[serde(default = "default_resolved_address")]
    pub resolved_address: Ipv4Addr,

    /// Answer TTL in seconds.
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    /// RCODE sent for queries that are not answered.
    #[serde(default)]
    pub error_reply_code: ReplyCode,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            resolved_address: default_resolved_address(),
            ttl: default_ttl(),
            error_reply_code: ReplyCode::default(),
        }
    }
}

fn default_domain() -> String {
    WILDCARD_DOMAIN.to_string()
}

fn default_resolved_address() -> Ipv4Addr {
    DEFAULT_RESOLVED_ADDRESS
}

fn default_ttl() -> u32 {
    DEFAULT_TTL
}
