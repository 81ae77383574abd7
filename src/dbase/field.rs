/*
This code is part of the shapefile_codec library.
Created: 13/02/2026
Last Modified: 09/06/2026
License: MIT
*/
use crate::error::{Error, Result};
use std::fmt;

/// The most fields a single .dbf header can describe.
pub const MAX_FIELD_COUNT: usize = 128;

/// The maximum length of a field name on disk (11 bytes, NUL padded).
pub const MAX_FIELD_NAME_LENGTH: usize = 11;

/// A 1 to 11 character dBase field identifier; never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DbaseFieldName(String);

impl DbaseFieldName {
    pub fn new(name: &str) -> Result<DbaseFieldName> {
        if name.is_empty() {
            return Err(Error::invalid("field name", "name is empty".to_string()));
        }
        if name.len() > MAX_FIELD_NAME_LENGTH {
            return Err(Error::invalid(
                "field name",
                format!(
                    "'{}' is {} bytes long, the maximum is {}",
                    name,
                    name.len(),
                    MAX_FIELD_NAME_LENGTH
                ),
            ));
        }
        Ok(DbaseFieldName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DbaseFieldName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The on-disk field type tag of a .dbf field descriptor.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DbaseFieldType {
    Character = b'C',
    Date = b'D',
    Float = b'F',
    Logical = b'L',
    Number = b'N',
}

impl DbaseFieldType {
    pub fn parse(value: u8) -> Result<DbaseFieldType> {
        match value {
            b'C' => Ok(DbaseFieldType::Character),
            b'D' => Ok(DbaseFieldType::Date),
            b'F' => Ok(DbaseFieldType::Float),
            b'L' => Ok(DbaseFieldType::Logical),
            b'N' => Ok(DbaseFieldType::Number),
            other => Err(Error::invalid(
                "field type",
                format!("'{}' (0x{:02x}) is not a dBase field type", other as char, other),
            )),
        }
    }

    pub fn to_byte(&self) -> u8 {
        *self as u8
    }

    fn is_numeric(&self) -> bool {
        matches!(self, DbaseFieldType::Number | DbaseFieldType::Float)
    }
}

impl fmt::Display for DbaseFieldType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_byte() as char)
    }
}

/// One .dbf field descriptor: name, type tag, declared width, decimal
/// count, and the byte offset of the field inside a record (computed by
/// the schema, counted from the start of the record's value bytes).
#[derive(Clone, Debug, PartialEq)]
pub struct DbaseField {
    name: DbaseFieldName,
    field_type: DbaseFieldType,
    length: u8,
    decimal_count: u8,
    offset: i32,
}

impl DbaseField {
    pub fn new(
        name: DbaseFieldName,
        field_type: DbaseFieldType,
        length: u8,
        decimal_count: u8,
    ) -> Result<DbaseField> {
        if length == 0 {
            return Err(Error::invalid(
                "field length",
                format!("field '{}' declares zero width", name),
            ));
        }
        // the renderer emits a single flag byte / a packed yyyyMMdd date,
        // so any other declared width would corrupt the fixed-width record
        if field_type == DbaseFieldType::Logical && length != 1 {
            return Err(Error::invalid(
                "field length",
                format!("logical field '{}' declares {} bytes rather than 1", name, length),
            ));
        }
        if field_type == DbaseFieldType::Date && length != 8 {
            return Err(Error::invalid(
                "field length",
                format!("date field '{}' declares {} bytes rather than 8", name, length),
            ));
        }
        if field_type.is_numeric() && decimal_count > 0 && decimal_count as u16 >= length as u16 {
            return Err(Error::invalid(
                "decimal count",
                format!(
                    "field '{}' declares {} decimals in a width of {}",
                    name, decimal_count, length
                ),
            ));
        }
        Ok(DbaseField {
            name,
            field_type,
            length,
            decimal_count,
            offset: 0,
        })
    }

    pub fn character(name: &str, length: u8) -> Result<DbaseField> {
        DbaseField::new(DbaseFieldName::new(name)?, DbaseFieldType::Character, length, 0)
    }

    pub fn number(name: &str, length: u8, decimal_count: u8) -> Result<DbaseField> {
        DbaseField::new(
            DbaseFieldName::new(name)?,
            DbaseFieldType::Number,
            length,
            decimal_count,
        )
    }

    pub fn float(name: &str, length: u8, decimal_count: u8) -> Result<DbaseField> {
        DbaseField::new(
            DbaseFieldName::new(name)?,
            DbaseFieldType::Float,
            length,
            decimal_count,
        )
    }

    pub fn date(name: &str) -> Result<DbaseField> {
        DbaseField::new(DbaseFieldName::new(name)?, DbaseFieldType::Date, 8, 0)
    }

    pub fn logical(name: &str) -> Result<DbaseField> {
        DbaseField::new(DbaseFieldName::new(name)?, DbaseFieldType::Logical, 1, 0)
    }

    pub fn name(&self) -> &DbaseFieldName {
        &self.name
    }

    pub fn field_type(&self) -> DbaseFieldType {
        self.field_type
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn decimal_count(&self) -> u8 {
        self.decimal_count
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub(crate) fn at_offset(mut self, offset: i32) -> DbaseField {
        self.offset = offset;
        self
    }
}

/// The ordered, non-empty field list of a .dbf file. Field order defines
/// both the on-disk layout and the value order of every record.
#[derive(Clone, Debug, PartialEq)]
pub struct DbaseSchema {
    fields: Vec<DbaseField>,
}

impl DbaseSchema {
    pub fn new(fields: Vec<DbaseField>) -> Result<DbaseSchema> {
        if fields.is_empty() {
            return Err(Error::invalid("schema", "no fields".to_string()));
        }
        if fields.len() > MAX_FIELD_COUNT {
            return Err(Error::invalid(
                "schema",
                format!("{} fields exceed the maximum of {}", fields.len(), MAX_FIELD_COUNT),
            ));
        }
        let mut offset = 0i32;
        let fields = fields
            .into_iter()
            .map(|f| {
                let placed = f.at_offset(offset);
                offset += placed.length() as i32;
                placed
            })
            .collect();
        Ok(DbaseSchema { fields })
    }

    pub fn fields(&self) -> &[DbaseField] {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// The on-disk record length in bytes: one deletion flag byte plus the
    /// declared width of every field.
    pub fn record_length(&self) -> i32 {
        1 + self.fields.iter().map(|f| f.length() as i32).sum::<i32>()
    }
}
