/*
This code is part of the shapefile_codec library.
Created: 11/02/2026
Last Modified: 03/06/2026
License: MIT
*/
use crate::error::Result;
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use std::io::Write;

/// Endian-explicit write primitives, tracking the number of bytes written.
pub struct ByteOrderWriter<W: Write> {
    writer: W,
    num_bytes_written: usize,
}

impl<W: Write> ByteOrderWriter<W> {
    pub fn new(writer: W) -> ByteOrderWriter<W> {
        ByteOrderWriter {
            writer,
            num_bytes_written: 0,
        }
    }

    pub fn num_bytes_written(&self) -> usize {
        self.num_bytes_written
    }

    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.num_bytes_written += 1;
        Ok(self.writer.write_u8(value)?)
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.num_bytes_written += bytes.len();
        Ok(self.writer.write_all(bytes)?)
    }

    pub fn write_u16_le(&mut self, value: u16) -> Result<()> {
        self.num_bytes_written += 2;
        Ok(self.writer.write_u16::<LittleEndian>(value)?)
    }

    pub fn write_u32_le(&mut self, value: u32) -> Result<()> {
        self.num_bytes_written += 4;
        Ok(self.writer.write_u32::<LittleEndian>(value)?)
    }

    pub fn write_i32_be(&mut self, value: i32) -> Result<()> {
        self.num_bytes_written += 4;
        Ok(self.writer.write_i32::<BigEndian>(value)?)
    }

    pub fn write_i32_le(&mut self, value: i32) -> Result<()> {
        self.num_bytes_written += 4;
        Ok(self.writer.write_i32::<LittleEndian>(value)?)
    }

    pub fn write_f64_be(&mut self, value: f64) -> Result<()> {
        self.num_bytes_written += 8;
        Ok(self.writer.write_f64::<BigEndian>(value)?)
    }

    pub fn write_f64_le(&mut self, value: f64) -> Result<()> {
        self.num_bytes_written += 8;
        Ok(self.writer.write_f64::<LittleEndian>(value)?)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
