mod dns_responder;

pub use dns_responder::{DnsResponder, ResponderStats};
