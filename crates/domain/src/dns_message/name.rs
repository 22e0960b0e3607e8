use super::{WireCursor, HEADER_LEN};

pub const MAX_LABEL_LEN: usize = 63;

const WWW_PREFIX: &str = "www.";
const POINTER_TAG: u16 = 0xC000;
const POINTER_OFFSET_MASK: u16 = 0x3FFF;

/// Lowercases `name` and strips a single leading `www.`.
pub fn normalize_domain(name: &str) -> String {
    let lower = name.to_ascii_lowercase();
    match lower.strip_prefix(WWW_PREFIX) {
        Some(rest) => rest.to_string(),
        None => lower,
    }
}

/// Decodes the question name into dotted, normalized form for matching.
///
/// Returns `None` when no match is possible: a label longer than 63 bytes, a
/// label or terminator past the end of the packet, or an empty (root) name.
/// Label bytes map one-to-one onto chars.
pub fn decode_query_name(packet: &[u8]) -> Option<String> {
    let mut cursor = WireCursor::at(packet, HEADER_LEN);
    let mut name = String::new();

    loop {
        let label_len = usize::from(cursor.read_u8().ok()?);
        if label_len == 0 {
            break;
        }
        if label_len > MAX_LABEL_LEN {
            return None;
        }
        let label = cursor.take(label_len).ok()?;
        if !name.is_empty() {
            name.push('.');
        }
        name.extend(label.iter().copied().map(char::from));
    }

    if name.is_empty() {
        return None;
    }
    Some(normalize_domain(&name))
}

/// Two-byte compression pointer to a name at `offset` in the message.
pub const fn compression_pointer(offset: u16) -> [u8; 2] {
    (POINTER_TAG | (offset & POINTER_OFFSET_MASK)).to_be_bytes()
}
