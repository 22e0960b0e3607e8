use super::{WireCursor, HEADER_LEN};
use crate::DomainError;

/// Upper bound on the encoded QNAME, terminator included (RFC 1035 §2.3.4).
pub const MAX_QNAME_LEN: usize = 255;

/// The single question of a query, kept in wire form so it can be echoed
/// into the reply byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    qname_buf: [u8; MAX_QNAME_LEN],
    qname_len: usize,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    /// Parses the question that starts right after the header.
    pub fn parse(packet: &[u8]) -> Result<Self, DomainError> {
        let mut cursor = WireCursor::at(packet, HEADER_LEN);
        let mut qname_buf = [0u8; MAX_QNAME_LEN];
        let mut qname_len = 0usize;

        loop {
            let len_byte = cursor.read_u8()?;
            if len_byte == 0 {
                break;
            }
            let label_len = usize::from(len_byte);
            // Room for the length byte, the label and the final terminator.
            if qname_len + 1 + label_len >= MAX_QNAME_LEN {
                return Err(DomainError::Malformed("question name too long"));
            }
            let label = cursor.take(label_len)?;

            let dst = &mut qname_buf[qname_len..qname_len + 1 + label_len];
            dst[0] = len_byte;
            dst[1..].copy_from_slice(label);
            qname_len += 1 + label_len;
        }

        qname_buf[qname_len] = 0;
        qname_len += 1;

        let qtype = cursor.read_u16()?;
        let qclass = cursor.read_u16()?;

        Ok(Self {
            qname_buf,
            qname_len,
            qtype,
            qclass,
        })
    }

    /// Encoded name including the zero terminator.
    pub fn encoded_name(&self) -> &[u8] {
        &self.qname_buf[..self.qname_len]
    }

    /// Bytes the question occupies on the wire: name, QTYPE and QCLASS.
    pub fn encoded_len(&self) -> usize {
        self.qname_len + 4
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.encoded_name());
        out.extend_from_slice(&self.qtype.to_be_bytes());
        out.extend_from_slice(&self.qclass.to_be_bytes());
    }
}
