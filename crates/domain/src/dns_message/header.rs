use super::WireCursor;
use crate::DomainError;

pub const HEADER_LEN: usize = 12;
pub const OPCODE_QUERY: u8 = 0;

const QR_BIT: u8 = 0x80;
const OPCODE_SHIFT: u8 = 3;
const OPCODE_MASK: u8 = 0x0F;
const RCODE_MASK: u8 = 0x0F;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Query,
    Response,
}

/// Parsed fixed header. The raw bytes are kept so a reply can echo the
/// transaction id and every flag bit it does not touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader {
    raw: [u8; HEADER_LEN],
    pub id: u16,
    pub kind: MessageKind,
    pub opcode: u8,
    pub rcode: u8,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl MessageHeader {
    pub fn parse(packet: &[u8]) -> Result<Self, DomainError> {
        let mut cursor = WireCursor::new(packet);
        let raw: [u8; HEADER_LEN] = cursor
            .read_array()
            .map_err(|_| DomainError::Malformed("packet shorter than DNS header"))?;

        let mut fields = WireCursor::new(&raw);
        let id = fields.read_u16()?;
        let flags_hi = fields.read_u8()?;
        let flags_lo = fields.read_u8()?;

        Ok(Self {
            raw,
            id,
            kind: if flags_hi & QR_BIT == 0 {
                MessageKind::Query
            } else {
                MessageKind::Response
            },
            opcode: (flags_hi >> OPCODE_SHIFT) & OPCODE_MASK,
            rcode: flags_lo & RCODE_MASK,
            question_count: fields.read_u16()?,
            answer_count: fields.read_u16()?,
            authority_count: fields.read_u16()?,
            additional_count: fields.read_u16()?,
        })
    }

    pub fn raw(&self) -> &[u8; HEADER_LEN] {
        &self.raw
    }

    pub fn is_query(&self) -> bool {
        self.kind == MessageKind::Query
    }

    pub fn is_standard_query(&self) -> bool {
        self.is_query() && self.opcode == OPCODE_QUERY
    }

    /// Exactly one question and no answer, authority or additional records.
    pub fn has_single_question(&self) -> bool {
        self.question_count == 1
            && self.answer_count == 0
            && self.authority_count == 0
            && self.additional_count == 0
    }

    /// Copy of the raw header with QR set, ready to be patched into a reply.
    pub fn response_bytes(&self) -> [u8; HEADER_LEN] {
        let mut raw = self.raw;
        raw[2] |= QR_BIT;
        raw
    }

    /// Copy of the raw header with QR set and RCODE replaced.
    pub fn response_bytes_with_rcode(&self, rcode: u8) -> [u8; HEADER_LEN] {
        let mut raw = self.response_bytes();
        raw[3] = (raw[3] & !RCODE_MASK) | (rcode & RCODE_MASK);
        raw
    }
}
