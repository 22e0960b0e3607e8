use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::responder::ResponderConfig;
use super::server::ServerConfig;
use crate::{ReplyCode, ResponderSettings, TargetDomain};

const LOCAL_CONFIG_PATH: &str = "captive-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/captive-dns/config.toml";

/// Main configuration structure for Captive DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening socket
    #[serde(default)]
    pub server: ServerConfig,

    /// What to answer and how
    #[serde(default)]
    pub responder: ResponderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. captive-dns.toml in current directory
    /// 3. /etc/captive-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(domain) = overrides.domain {
            self.responder.domain = domain;
        }
        if let Some(address) = overrides.resolved_address {
            self.responder.resolved_address = address;
        }
        if let Some(ttl) = overrides.ttl {
            self.responder.ttl = ttl;
        }
        if let Some(code) = overrides.error_reply_code {
            self.responder.error_reply_code = code;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        self.responder
            .domain
            .parse::<TargetDomain>()
            .map_err(|e| ConfigError::Validation(format!("Responder domain: {}", e)))?;

        Ok(())
    }

    pub fn responder_settings(&self) -> ResponderSettings {
        ResponderSettings {
            port: self.server.dns_port,
            domain: TargetDomain::new(&self.responder.domain),
            resolved_address: self.responder.resolved_address,
            ttl: self.responder.ttl,
            error_reply_code: self.responder.error_reply_code,
        }
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<IpAddr>,
    pub domain: Option<String>,
    pub resolved_address: Option<Ipv4Addr>,
    pub ttl: Option<u32>,
    pub error_reply_code: Option<ReplyCode>,
    pub log_level: Option<String>,
}
