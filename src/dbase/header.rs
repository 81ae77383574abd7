/*
This code is part of the shapefile_codec library.
Created: 14/02/2026
Last Modified: 10/06/2026
License: MIT

Notes: The 32-byte .dbf prologue is followed by one 32-byte descriptor per
field and a 0x0d terminator. The header-length field is what tells a
forward-only reader how many descriptors follow: (length - 33) / 32.
*/
use crate::dbase::field::{DbaseField, DbaseFieldName, DbaseFieldType, DbaseSchema};
use crate::error::{Error, Result};
use crate::primitives::{DbaseCodePage, DbaseRecordCount};
use crate::utils::{ByteOrderReader, ByteOrderWriter};
use chrono::{Datelike, NaiveDate};
use std::io::{Read, Write};

const VERSION: u8 = 0x03;
const PROLOGUE_LENGTH: u16 = 32;
const FIELD_DESCRIPTOR_LENGTH: u16 = 32;
const TERMINATOR: u8 = 0x0d;

/// The .dbf file header: last-update date, code page, declared record
/// count, and the schema describing every record that follows. The header
/// owns its schema.
#[derive(Clone, Debug, PartialEq)]
pub struct DbaseFileHeader {
    last_update: NaiveDate,
    code_page: DbaseCodePage,
    record_count: DbaseRecordCount,
    schema: DbaseSchema,
}

impl DbaseFileHeader {
    pub fn new(
        last_update: NaiveDate,
        code_page: DbaseCodePage,
        record_count: DbaseRecordCount,
        schema: DbaseSchema,
    ) -> Result<DbaseFileHeader> {
        // the on-disk date is a single byte of years since 1900
        if last_update.year() < 1900 || last_update.year() > 1900 + 255 {
            return Err(Error::invalid(
                "last update date",
                format!("year {} cannot be stored as an offset from 1900", last_update.year()),
            ));
        }
        Ok(DbaseFileHeader {
            last_update,
            code_page,
            record_count,
            schema,
        })
    }

    pub fn last_update(&self) -> NaiveDate {
        self.last_update
    }

    pub fn code_page(&self) -> DbaseCodePage {
        self.code_page
    }

    pub fn record_count(&self) -> DbaseRecordCount {
        self.record_count
    }

    pub fn schema(&self) -> &DbaseSchema {
        &self.schema
    }

    /// The total on-disk record length in bytes, derived from the schema.
    pub fn record_length(&self) -> i32 {
        self.schema.record_length()
    }

    /// The on-disk header length: prologue, descriptors, terminator.
    pub fn header_length(&self) -> u16 {
        PROLOGUE_LENGTH + self.schema.field_count() as u16 * FIELD_DESCRIPTOR_LENGTH + 1
    }

    pub fn write<W: Write>(&self, writer: &mut ByteOrderWriter<W>) -> Result<()> {
        writer.write_u8(VERSION)?;
        writer.write_u8((self.last_update.year() - 1900) as u8)?;
        writer.write_u8(self.last_update.month() as u8)?;
        writer.write_u8(self.last_update.day() as u8)?;
        writer.write_u32_le(self.record_count.value() as u32)?;
        writer.write_u16_le(self.header_length())?;
        writer.write_u16_le(self.record_length() as u16)?;
        // reserved region up to the language driver id at offset 29
        for _ in 12..29 {
            writer.write_u8(0u8)?;
        }
        writer.write_u8(self.code_page.to_byte())?;
        writer.write_u8(0u8)?;
        writer.write_u8(0u8)?;

        for field in self.schema.fields() {
            let mut name = field.name().as_str().as_bytes().to_vec();
            name.resize(11, 0u8);
            writer.write_bytes(&name)?;
            writer.write_u8(field.field_type().to_byte())?;
            for _ in 0..4 {
                writer.write_u8(0u8)?;
            }
            writer.write_u8(field.length())?;
            writer.write_u8(field.decimal_count())?;
            for _ in 0..14 {
                writer.write_u8(0u8)?;
            }
        }

        writer.write_u8(TERMINATOR)?;
        Ok(())
    }

    pub fn read<R: Read>(reader: &mut ByteOrderReader<R>) -> Result<DbaseFileHeader> {
        let version = reader.read_u8()?;
        if version != VERSION {
            return Err(Error::invalid(
                "dBase version",
                format!("0x{:02x} is not a supported version byte", version),
            ));
        }
        let year = 1900i32 + reader.read_u8()? as i32;
        let month = reader.read_u8()? as u32;
        let day = reader.read_u8()? as u32;
        let last_update = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            Error::invalid(
                "last update date",
                format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day),
            )
        })?;
        let record_count = DbaseRecordCount::new(reader.read_u32_le()? as i32)?;
        let header_length = reader.read_u16_le()?;
        let record_length = reader.read_u16_le()?;
        reader.skip(17)?;
        let code_page = DbaseCodePage::parse(reader.read_u8()?)?;
        reader.skip(2)?;

        if header_length < PROLOGUE_LENGTH + FIELD_DESCRIPTOR_LENGTH + 1
            || (header_length - PROLOGUE_LENGTH - 1) % FIELD_DESCRIPTOR_LENGTH != 0
        {
            return Err(Error::invalid(
                "header length",
                format!("{} does not describe a whole number of fields", header_length),
            ));
        }
        let field_count = (header_length - PROLOGUE_LENGTH - 1) / FIELD_DESCRIPTOR_LENGTH;

        let mut fields = Vec::with_capacity(field_count as usize);
        for _ in 0..field_count {
            let mut name_bytes = [0u8; 11];
            reader.read_exact(&mut name_bytes)?;
            let name: String = name_bytes
                .iter()
                .take_while(|b| **b != 0u8)
                .map(|b| *b as char)
                .collect();
            let field_type = DbaseFieldType::parse(reader.read_u8()?)?;
            reader.skip(4)?;
            let length = reader.read_u8()?;
            let decimal_count = reader.read_u8()?;
            reader.skip(14)?;
            fields.push(DbaseField::new(
                DbaseFieldName::new(&name)?,
                field_type,
                length,
                decimal_count,
            )?);
        }
        let terminator = reader.read_u8()?;
        if terminator != TERMINATOR {
            return Err(Error::invalid(
                "header terminator",
                format!("expected 0x{:02x}, found 0x{:02x}", TERMINATOR, terminator),
            ));
        }

        let schema = DbaseSchema::new(fields)?;
        if schema.record_length() != record_length as i32 {
            return Err(Error::invalid(
                "record length",
                format!(
                    "header declares {} but the schema fields add up to {}",
                    record_length,
                    schema.record_length()
                ),
            ));
        }
        DbaseFileHeader::new(last_update, code_page, record_count, schema)
    }
}

#[cfg(test)]
mod test {
    use super::DbaseFileHeader;
    use crate::dbase::field::{DbaseField, DbaseSchema};
    use crate::primitives::{DbaseCodePage, DbaseRecordCount};
    use crate::utils::{ByteOrderReader, ByteOrderWriter};
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn sample_header() -> DbaseFileHeader {
        let schema = DbaseSchema::new(vec![
            DbaseField::number("ID", 10, 0).unwrap(),
            DbaseField::character("NAME", 24).unwrap(),
        ])
        .unwrap();
        DbaseFileHeader::new(
            NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
            DbaseCodePage::WindowsAnsi,
            DbaseRecordCount::new(3).unwrap(),
            schema,
        )
        .unwrap()
    }

    #[test]
    fn test_header_roundtrip() {
        let header = sample_header();
        let mut bow = ByteOrderWriter::new(vec![]);
        header.write(&mut bow).unwrap();
        let bytes = bow.into_inner();
        assert_eq!(bytes.len(), header.header_length() as usize);

        let mut bor = ByteOrderReader::new(Cursor::new(bytes));
        let read_back = DbaseFileHeader::read(&mut bor).unwrap();
        assert_eq!(read_back, header);
    }

    #[test]
    fn test_header_lengths() {
        let header = sample_header();
        assert_eq!(header.header_length(), 32 + 2 * 32 + 1);
        assert_eq!(header.record_length(), 1 + 10 + 24);
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let header = sample_header();
        let mut bow = ByteOrderWriter::new(vec![]);
        header.write(&mut bow).unwrap();
        let mut bytes = bow.into_inner();
        bytes[0] = 0x8b;
        let mut bor = ByteOrderReader::new(Cursor::new(bytes));
        assert!(DbaseFileHeader::read(&mut bor).is_err());
    }
}
