#![allow(dead_code)]

/// Builds raw DNS query datagrams.
pub struct QueryBuilder {
    id: u16,
    flags: [u8; 2],
    question_count: u16,
    answer_count: u16,
    authority_count: u16,
    additional_count: u16,
    name: Vec<u8>,
    qtype: u16,
    qclass: u16,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x1234,
            flags: [0x01, 0x00], // RD set
            question_count: 1,
            answer_count: 0,
            authority_count: 0,
            additional_count: 0,
            name: encode_name("example.com"),
            qtype: 1,
            qclass: 1,
        }
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.name = encode_name(domain);
        self
    }

    /// Replaces the encoded QNAME verbatim, terminator included.
    pub fn raw_name(mut self, name: &[u8]) -> Self {
        self.name = name.to_vec();
        self
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, hi: u8, lo: u8) -> Self {
        self.flags = [hi, lo];
        self
    }

    pub fn response(mut self) -> Self {
        self.flags[0] |= 0x80;
        self
    }

    pub fn opcode(mut self, opcode: u8) -> Self {
        self.flags[0] = (self.flags[0] & 0x87) | ((opcode & 0x0F) << 3);
        self
    }

    pub fn question_count(mut self, count: u16) -> Self {
        self.question_count = count;
        self
    }

    pub fn answer_count(mut self, count: u16) -> Self {
        self.answer_count = count;
        self
    }

    pub fn authority_count(mut self, count: u16) -> Self {
        self.authority_count = count;
        self
    }

    pub fn additional_count(mut self, count: u16) -> Self {
        self.additional_count = count;
        self
    }

    pub fn qtype(mut self, qtype: u16) -> Self {
        self.qtype = qtype;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(12 + self.name.len() + 4);
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags);
        buf.extend_from_slice(&self.question_count.to_be_bytes());
        buf.extend_from_slice(&self.answer_count.to_be_bytes());
        buf.extend_from_slice(&self.authority_count.to_be_bytes());
        buf.extend_from_slice(&self.additional_count.to_be_bytes());
        buf.extend_from_slice(&self.name);
        buf.extend_from_slice(&self.qtype.to_be_bytes());
        buf.extend_from_slice(&self.qclass.to_be_bytes());
        buf
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn encode_name(domain: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in domain.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0x00); // root label
    out
}
