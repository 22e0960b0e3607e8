use crate::dns_message::name::{normalize_domain, MAX_LABEL_LEN};
use crate::DomainError;
use std::fmt;
use std::str::FromStr;

pub const WILDCARD_DOMAIN: &str = "*";

/// Longest dotted name that still fits in a 255-byte encoded QNAME.
const MAX_DOMAIN_LEN: usize = 253;

/// The single domain the responder answers for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TargetDomain {
    /// `*`: every query name matches, including ones that cannot be decoded.
    #[default]
    Any,
    /// Lowercased, without a leading `www.`.
    Exact(String),
}

impl TargetDomain {
    pub fn new(domain: &str) -> Self {
        let normalized = normalize_domain(domain.trim());
        if normalized == WILDCARD_DOMAIN {
            TargetDomain::Any
        } else {
            TargetDomain::Exact(normalized)
        }
    }

    /// `query_name` is the decoded, normalized question name; `None` means it
    /// could not be decoded.
    pub fn matches(&self, query_name: Option<&str>) -> bool {
        match self {
            TargetDomain::Any => true,
            TargetDomain::Exact(domain) => query_name == Some(domain.as_str()),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, TargetDomain::Any)
    }
}

impl fmt::Display for TargetDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetDomain::Any => write!(f, "{}", WILDCARD_DOMAIN),
            TargetDomain::Exact(domain) => write!(f, "{}", domain),
        }
    }
}

/// Strict form of [`TargetDomain::new`] for operator input.
impl FromStr for TargetDomain {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "domain cannot be empty (use \"*\" to answer every name)".to_string(),
            ));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' contains whitespace",
                trimmed
            )));
        }

        let target = Self::new(trimmed);
        if let TargetDomain::Exact(name) = &target {
            if name.len() > MAX_DOMAIN_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "'{}' is longer than {} characters",
                    trimmed, MAX_DOMAIN_LEN
                )));
            }
            if name
                .split('.')
                .any(|label| label.is_empty() || label.len() > MAX_LABEL_LEN)
            {
                return Err(DomainError::InvalidDomainName(format!(
                    "'{}' has an empty label or one longer than {} bytes",
                    trimmed, MAX_LABEL_LEN
                )));
            }
        }
        Ok(target)
    }
}

impl From<&str> for TargetDomain {
    fn from(domain: &str) -> Self {
        Self::new(domain)
    }
}
