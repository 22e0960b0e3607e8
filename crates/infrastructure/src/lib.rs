//! Captive DNS Infrastructure Layer
pub mod dns;
