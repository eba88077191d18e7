//! Position cursor over a decoded payload.

use crate::error::{Error, Result};

/// Reads fields sequentially, advancing by each field's width.
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    fn take(&mut self, width: usize) -> Result<&'a [u8]> {
        if self.remaining() < width {
            return Err(Error::Truncated {
                position: self.position,
                needed: width - self.remaining(),
            });
        }
        let field = &self.bytes[self.position..self.position + width];
        self.position += width;
        Ok(field)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        let field = self.take(2)?;
        Ok(u16::from_le_bytes([field[0], field[1]]))
    }

    /// Fail when unread bytes are left over.
    pub fn finish(self) -> Result<()> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(Error::TrailingBytes(n)),
        }
    }
}
