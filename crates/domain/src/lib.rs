//! Captive DNS Domain Layer
pub mod config;
pub mod dns_message;
pub mod errors;
pub mod reply_code;
pub mod responder_settings;
pub mod target_domain;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{MessageHeader, MessageKind, Question};
pub use errors::DomainError;
pub use reply_code::ReplyCode;
pub use responder_settings::ResponderSettings;
pub use target_domain::TargetDomain;
