use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RCODE values the responder can send back for queries it does not answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ReplyCode {
    NoError = 0,
    FormError = 1,
    ServerFailure = 2,
    #[default]
    NonExistentDomain = 3,
    NotImplemented = 4,
    Refused = 5,
}

impl ReplyCode {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyCode::NoError => "no_error",
            ReplyCode::FormError => "form_error",
            ReplyCode::ServerFailure => "server_failure",
            ReplyCode::NonExistentDomain => "non_existent_domain",
            ReplyCode::NotImplemented => "not_implemented",
            ReplyCode::Refused => "refused",
        }
    }

    /// Conventional mnemonic, e.g. `NXDOMAIN`.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            ReplyCode::NoError => "NOERROR",
            ReplyCode::FormError => "FORMERR",
            ReplyCode::ServerFailure => "SERVFAIL",
            ReplyCode::NonExistentDomain => "NXDOMAIN",
            ReplyCode::NotImplemented => "NOTIMP",
            ReplyCode::Refused => "REFUSED",
        }
    }
}

impl FromStr for ReplyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "no_error" | "noerror" => Ok(ReplyCode::NoError),
            "form_error" | "formerr" => Ok(ReplyCode::FormError),
            "server_failure" | "servfail" => Ok(ReplyCode::ServerFailure),
            "non_existent_domain" | "nxdomain" => Ok(ReplyCode::NonExistentDomain),
            "not_implemented" | "notimp" => Ok(ReplyCode::NotImplemented),
            "refused" => Ok(ReplyCode::Refused),
            _ => Err(format!(
                "Invalid reply code '{}'. Expected one of: noerror, formerr, servfail, nxdomain, notimp, refused",
                s
            )),
        }
    }
}

impl TryFrom<String> for ReplyCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ReplyCode> for &'static str {
    fn from(code: ReplyCode) -> Self {
        code.as_str()
    }
}

impl fmt::Display for ReplyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
