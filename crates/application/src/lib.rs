//! Captive DNS Application Layer
pub mod ports;
pub mod services;
pub mod use_cases;

pub use services::{DnsResponder, ResponderStats};
pub use use_cases::{DatagramOutcome, HandleDatagramUseCase, ResponseKind};
