//! Sequential byte cursor with explicit byte order.
//!
//! Shapefiles mix byte orders: the file code, file length, record number
//! and content length are big-endian, every other integer and every double
//! is little-endian. Each read names its byte order.
//!
//! Reads never return partial or default values. A read that needs more
//! bytes than remain fails with [`ShpError::UnexpectedEndOfData`] and leaves
//! the cursor where it was.

use crate::error::{Result, ShpError};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::Cursor;

/// Cursor over an in-memory byte source.
///
/// `T` is anything that derefs to bytes: an owned `Vec<u8>` for a whole
/// file, or a borrowed `&[u8]` for one record body.
#[derive(Debug, Clone)]
pub struct ByteReader<T = Vec<u8>> {
    stream: Cursor<T>,
}

impl<T: AsRef<[u8]>> ByteReader<T> {
    /// Wrap a byte source with the cursor at offset 0.
    pub fn new(data: T) -> Self {
        Self {
            stream: Cursor::new(data),
        }
    }

    /// Current absolute offset.
    pub fn position(&self) -> u64 {
        self.stream.position()
    }

    /// Total length of the source in bytes.
    pub fn len(&self) -> u64 {
        self.stream.get_ref().as_ref().len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes left between the cursor and the end of the source.
    pub fn remaining(&self) -> u64 {
        self.len().saturating_sub(self.position())
    }

    /// Whether the cursor has reached the end of the source.
    pub fn at_end(&self) -> bool {
        self.position() >= self.len()
    }

    /// Underlying bytes.
    pub fn get_ref(&self) -> &T {
        self.stream.get_ref()
    }

    /// Move the cursor to an absolute offset. The end of the source is a
    /// valid target; anything past it is not.
    pub fn seek(&mut self, offset: u64) -> Result<()> {
        if offset > self.len() {
            return Err(ShpError::UnexpectedEndOfData {
                offset,
                needed: 0,
                available: 0,
            });
        }
        self.stream.set_position(offset);
        Ok(())
    }

    /// Advance the cursor by `count` bytes.
    pub fn skip(&mut self, count: u64) -> Result<()> {
        self.ensure(count)?;
        self.stream.set_position(self.position() + count);
        Ok(())
    }

    /// Fail unless `needed` more bytes can be read.
    pub fn ensure(&self, needed: u64) -> Result<()> {
        let available = self.remaining();
        if needed > available {
            return Err(ShpError::UnexpectedEndOfData {
                offset: self.position(),
                needed: needed as usize,
                available: available as usize,
            });
        }
        Ok(())
    }

    pub fn read_i32_be(&mut self) -> Result<i32> {
        self.ensure(4)?;
        Ok(self.stream.read_i32::<BigEndian>()?)
    }

    pub fn read_i32_le(&mut self) -> Result<i32> {
        self.ensure(4)?;
        Ok(self.stream.read_i32::<LittleEndian>()?)
    }

    pub fn read_u32_be(&mut self) -> Result<u32> {
        self.ensure(4)?;
        Ok(self.stream.read_u32::<BigEndian>()?)
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        self.ensure(4)?;
        Ok(self.stream.read_u32::<LittleEndian>()?)
    }

    pub fn read_f64_le(&mut self) -> Result<f64> {
        self.ensure(8)?;
        Ok(self.stream.read_f64::<LittleEndian>()?)
    }
}
