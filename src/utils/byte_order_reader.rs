/*
This code is part of the shapefile_codec library.
Created: 11/02/2026
Last Modified: 03/06/2026
License: MIT

Notes: The shapefile formats use mixed endianness: record headers and some
file-header fields are big-endian while all content payloads are
little-endian. Each read primitive therefore names its byte order
explicitly rather than carrying a stateful byte-order switch.
*/
use crate::error::{Error, Result};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use std::io::Read;

/// Endian-explicit read primitives over any forward-only stream.
///
/// A short read never surfaces as a bare I/O error; it becomes
/// `Error::StreamTruncated` carrying the exact number of bytes the caller
/// asked for and the number the stream could still supply.
pub struct ByteOrderReader<R: Read> {
    reader: R,
    pos: usize,
}

impl<R: Read> ByteOrderReader<R> {
    pub fn new(reader: R) -> ByteOrderReader<R> {
        ByteOrderReader { reader, pos: 0 }
    }

    /// The number of bytes consumed from the stream so far.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Fills `buf` completely or fails with a truncation error reporting
    /// how many bytes were actually available.
    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0usize;
        while filled < buf.len() {
            let n = self.reader.read(&mut buf[filled..])?;
            if n == 0 {
                return Err(Error::StreamTruncated {
                    expected: buf.len(),
                    actual: filled,
                });
            }
            filled += n;
        }
        self.pos += buf.len();
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    pub fn read_i32_be(&mut self) -> Result<i32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(BigEndian::read_i32(&buf))
    }

    pub fn read_i32_le(&mut self) -> Result<i32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(LittleEndian::read_i32(&buf))
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf)?;
        Ok(LittleEndian::read_u16(&buf))
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(LittleEndian::read_u32(&buf))
    }

    pub fn read_f64_be(&mut self) -> Result<f64> {
        let mut buf = [0u8; 8];
        self.read_exact(&mut buf)?;
        Ok(BigEndian::read_f64(&buf))
    }

    pub fn read_f64_le(&mut self) -> Result<f64> {
        let mut buf = [0u8; 8];
        self.read_exact(&mut buf)?;
        Ok(LittleEndian::read_f64(&buf))
    }

    /// Reads and discards `count` bytes (reserved or padding regions).
    pub fn skip(&mut self, count: usize) -> Result<()> {
        let mut remaining = count;
        let mut chunk = [0u8; 32];
        while remaining > 0 {
            let take = remaining.min(chunk.len());
            let mut filled = 0usize;
            while filled < take {
                let n = self.reader.read(&mut chunk[filled..take])?;
                if n == 0 {
                    return Err(Error::StreamTruncated {
                        expected: count,
                        actual: count - remaining + filled,
                    });
                }
                filled += n;
            }
            self.pos += take;
            remaining -= take;
        }
        Ok(())
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}
