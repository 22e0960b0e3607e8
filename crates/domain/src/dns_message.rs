//! DNS-over-UDP wire subset handled by the responder (RFC 1035 §4.1).
//!
//! Only the header, a single question and one A answer are understood.
//! Everything that reads from an incoming datagram goes through
//! [`WireCursor`], so a hostile length byte can at worst produce
//! [`DomainError::Malformed`](crate::DomainError::Malformed).

pub mod cursor;
pub mod header;
pub mod name;
pub mod question;
pub mod reply;

pub use cursor::WireCursor;
pub use header::{MessageHeader, MessageKind, HEADER_LEN, OPCODE_QUERY};
pub use name::{compression_pointer, decode_query_name, normalize_domain, MAX_LABEL_LEN};
pub use question::{Question, MAX_QNAME_LEN};
pub use reply::{build_error_reply, build_ip_answer, CLASS_IN, RDLENGTH_IPV4, TYPE_A};
