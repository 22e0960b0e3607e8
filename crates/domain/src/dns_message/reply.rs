use super::{compression_pointer, MessageHeader, Question, HEADER_LEN};
use crate::ReplyCode;
use std::net::Ipv4Addr;

pub const TYPE_A: u16 = 1;
pub const CLASS_IN: u16 = 1;
pub const RDLENGTH_IPV4: u16 = 4;

/// NAME(2) TYPE(2) CLASS(2) TTL(4) RDLENGTH(2) RDATA(4)
const ANSWER_LEN: usize = 16;
const QNAME_POINTER: [u8; 2] = compression_pointer(HEADER_LEN as u16);

/// Builds the reply that points the queried name at `address`.
///
/// The header is echoed with QR set and ANCOUNT set to the question count,
/// followed by the original question and one A record whose name is a
/// pointer back to the question.
pub fn build_ip_answer(
    header: &MessageHeader,
    question: &Question,
    address: Ipv4Addr,
    ttl: u32,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + question.encoded_len() + ANSWER_LEN);

    let mut raw = header.response_bytes();
    raw[6..8].copy_from_slice(&header.question_count.to_be_bytes());
    out.extend_from_slice(&raw);

    question.write_to(&mut out);

    out.extend_from_slice(&QNAME_POINTER);
    out.extend_from_slice(&TYPE_A.to_be_bytes());
    out.extend_from_slice(&CLASS_IN.to_be_bytes());
    out.extend_from_slice(&ttl.to_be_bytes());
    out.extend_from_slice(&RDLENGTH_IPV4.to_be_bytes());
    out.extend_from_slice(&address.octets());
    out
}

/// Builds a header-only reply carrying `code`.
pub fn build_error_reply(header: &MessageHeader, code: ReplyCode) -> Vec<u8> {
    let mut raw = header.response_bytes_with_rcode(code.as_u8());
    // No sections follow, so every count is zero.
    raw[4..HEADER_LEN].fill(0);
    raw.to_vec()
}
