use super::error::ParamsError;
use super::layout;
use crate::ValueKind;

/// Sequential cursor over a parameters-file buffer.
///
/// The format has no random-access framing: every field starts where the
/// previous one ended, so the reader tracks a single position and exposes
/// the file's conventions (magic, group header, tagged payloads) directly.
pub struct ParamsReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ParamsReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos == self.buf.len()
    }

    fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(n)?;
        let bytes = self.buf.get(self.pos..end)?;
        self.pos = end;
        Some(bytes)
    }

    pub fn read_magic(&mut self) -> Result<(), ParamsError> {
        match self.take(layout::MAGIC.len()) {
            Some(bytes) if bytes == layout::MAGIC => Ok(()),
            _ => Err(ParamsError::BadMagic),
        }
    }

    pub fn read_group_tag(&mut self) -> Result<(), ParamsError> {
        let offset = self.pos;
        let available = self.remaining();
        match self.take(1) {
            None => Err(ParamsError::TruncatedGroupHeader {
                offset,
                needed: 1,
                available,
            }),
            Some([tag]) if *tag == layout::GROUP_TAG => Ok(()),
            Some(bytes) => Err(ParamsError::BadGroupTag {
                found: bytes[0],
                offset,
            }),
        }
    }

    pub fn read_group_len(&mut self) -> Result<u32, ParamsError> {
        let offset = self.pos;
        let available = self.remaining();
        let bytes = self
            .take(layout::GROUP_LEN_WIDTH)
            .ok_or(ParamsError::TruncatedGroupHeader {
                offset,
                needed: layout::GROUP_LEN_WIDTH,
                available,
            })?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read the next value tag byte, or `None` at the end of the group.
    ///
    /// Returns the tag together with its offset so failures downstream can
    /// point at the record, not at the payload that follows it.
    pub fn read_value_tag(&mut self) -> Option<(u8, usize)> {
        let offset = self.pos;
        let tag = self.take(1)?[0];
        Some((tag, offset))
    }

    pub fn read_u8_payload(&mut self, kind: ValueKind) -> Result<u8, ParamsError> {
        let bytes = self.read_payload(kind, 1)?;
        Ok(bytes[0])
    }

    pub fn read_u16_be_payload(&mut self, kind: ValueKind) -> Result<u16, ParamsError> {
        let bytes = self.read_payload(kind, 2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32_be_payload(&mut self, kind: ValueKind) -> Result<u32, ParamsError> {
        let bytes = self.read_payload(kind, 4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_payload(&mut self, kind: ValueKind, needed: usize) -> Result<&'a [u8], ParamsError> {
        let offset = self.pos;
        let available = self.remaining();
        self.take(needed).ok_or(ParamsError::TruncatedPayload {
            kind,
            offset,
            needed,
            available,
        })
    }
}
