use captive_dns_domain::dns_message::{
    build_error_reply, build_ip_answer, decode_query_name, MessageHeader, Question,
};
use captive_dns_domain::{DomainError, ResponderSettings};

/// What a single datagram turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatagramOutcome {
    /// Name matched: A answer with the configured address.
    Answered(Vec<u8>),
    /// A query that was not answered: header-only reply with the error code.
    Rejected(Vec<u8>),
    /// Well-formed but not a query. No reply.
    Ignored,
    /// Could not be parsed. No reply.
    Dropped(DomainError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    Answered,
    Rejected,
    Ignored,
    Dropped,
}

impl DatagramOutcome {
    pub fn kind(&self) -> ResponseKind {
        match self {
            DatagramOutcome::Answered(_) => ResponseKind::Answered,
            DatagramOutcome::Rejected(_) => ResponseKind::Rejected,
            DatagramOutcome::Ignored => ResponseKind::Ignored,
            DatagramOutcome::Dropped(_) => ResponseKind::Dropped,
        }
    }

    pub fn reply(&self) -> Option<&[u8]> {
        match self {
            DatagramOutcome::Answered(reply) | DatagramOutcome::Rejected(reply) => Some(reply),
            DatagramOutcome::Ignored | DatagramOutcome::Dropped(_) => None,
        }
    }
}

impl ResponseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::Answered => "ANSWERED",
            ResponseKind::Rejected => "REJECTED",
            ResponseKind::Ignored => "IGNORED",
            ResponseKind::Dropped => "DROPPED",
        }
    }
}

pub struct HandleDatagramUseCase {
    settings: ResponderSettings,
}

impl HandleDatagramUseCase {
    pub fn new(settings: ResponderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ResponderSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ResponderSettings {
        &mut self.settings
    }

    /// Decides the reply for one datagram.
    ///
    /// The question is only parsed when the header announces exactly one
    /// question and nothing else; other queries skip matching and get the
    /// error reply. A query is never answered silently unless its question
    /// is malformed.
    pub fn execute(&self, packet: &[u8]) -> DatagramOutcome {
        let header = match MessageHeader::parse(packet) {
            Ok(header) => header,
            Err(e) => return DatagramOutcome::Dropped(e),
        };

        let question = if header.has_single_question() {
            match Question::parse(packet) {
                Ok(question) => Some(question),
                Err(e) => return DatagramOutcome::Dropped(e),
            }
        } else {
            None
        };

        if !header.is_query() {
            return DatagramOutcome::Ignored;
        }

        if let Some(question) = question.filter(|_| header.is_standard_query()) {
            let query_name = decode_query_name(packet);
            if self.settings.domain.matches(query_name.as_deref()) {
                return DatagramOutcome::Answered(build_ip_answer(
                    &header,
                    &question,
                    self.settings.resolved_address,
                    self.settings.ttl,
                ));
            }
        }

        DatagramOutcome::Rejected(build_error_reply(
            &header,
            self.settings.error_reply_code,
        ))
    }
}
