use crate::DomainError;

/// Bounds-checked reader over an untrusted datagram.
///
/// A failed read leaves the position unchanged.
#[derive(Debug, Clone)]
pub struct WireCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Starts at `pos`. A position past the end is allowed; every read fails.
    pub fn at(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn peek_u8(&self) -> Result<u8, DomainError> {
        self.buf
            .get(self.pos)
            .copied()
            .ok_or(DomainError::Malformed("unexpected end of packet"))
    }

    /// Reads exactly `len` bytes or fails.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], DomainError> {
        let end = self
            .pos
            .checked_add(len)
            .ok_or(DomainError::Malformed("offset overflow"))?;
        let bytes = self
            .buf
            .get(self.pos..end)
            .ok_or(DomainError::Malformed("unexpected end of packet"))?;
        self.pos = end;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DomainError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, DomainError> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    pub fn read_u16(&mut self) -> Result<u16, DomainError> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }
}
