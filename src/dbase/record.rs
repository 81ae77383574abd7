/*
This code is part of the shapefile_codec library.
Created: 14/02/2026
Last Modified: 10/06/2026
License: MIT
*/
use crate::dbase::field::DbaseSchema;
use crate::dbase::value::DbaseFieldValue;
use crate::error::Result;
use crate::utils::{ByteOrderReader, ByteOrderWriter};
use std::io::{Read, Write};

/// The byte value terminating the data section of a .dbf file.
pub const END_OF_FILE: u8 = 0x1a;

const FLAG_VALID: u8 = b' ';
const FLAG_DELETED: u8 = b'*';

/// One .dbf record: a deletion flag and one typed value per schema field,
/// in schema order.
#[derive(Clone, Debug, PartialEq)]
pub struct DbaseRecord {
    pub is_deleted: bool,
    pub values: Vec<DbaseFieldValue>,
}

impl DbaseRecord {
    pub fn new(values: Vec<DbaseFieldValue>) -> DbaseRecord {
        DbaseRecord {
            is_deleted: false,
            values,
        }
    }

    pub fn write<W: Write>(&self, writer: &mut ByteOrderWriter<W>) -> Result<()> {
        writer.write_u8(if self.is_deleted { FLAG_DELETED } else { FLAG_VALID })?;
        for value in &self.values {
            writer.write_bytes(&value.render()?)?;
        }
        Ok(())
    }

    pub fn read<R: Read>(
        reader: &mut ByteOrderReader<R>,
        schema: &DbaseSchema,
    ) -> Result<DbaseRecord> {
        let flag = reader.read_u8()?;
        DbaseRecord::read_values(reader, schema, flag)
    }

    /// Completes a record whose deletion-flag byte the caller has already
    /// consumed (the record iterator reads that byte itself to detect the
    /// end-of-file marker).
    pub(crate) fn read_values<R: Read>(
        reader: &mut ByteOrderReader<R>,
        schema: &DbaseSchema,
        flag: u8,
    ) -> Result<DbaseRecord> {
        // anything other than '*' counts as a live record
        let is_deleted = flag == FLAG_DELETED;
        // one buffered read so a short record reports the full shortfall
        let value_length = (schema.record_length() - 1) as usize;
        let mut buffer = vec![0u8; value_length];
        reader.read_exact(&mut buffer)?;

        let values = schema
            .fields()
            .iter()
            .map(|field| {
                let start = field.offset() as usize;
                let end = start + field.length() as usize;
                DbaseFieldValue::parse(field, &buffer[start..end])
            })
            .collect();
        Ok(DbaseRecord { is_deleted, values })
    }
}

#[cfg(test)]
mod test {
    use super::DbaseRecord;
    use crate::dbase::field::{DbaseField, DbaseSchema};
    use crate::dbase::value::{DbaseFieldValue, DbaseValue};
    use crate::utils::{ByteOrderReader, ByteOrderWriter};
    use std::io::Cursor;

    fn sample_schema() -> DbaseSchema {
        DbaseSchema::new(vec![
            DbaseField::number("ID", 6, 0).unwrap(),
            DbaseField::character("NAME", 12).unwrap(),
            DbaseField::logical("ACTIVE").unwrap(),
        ])
        .unwrap()
    }

    fn sample_record(schema: &DbaseSchema) -> DbaseRecord {
        let fields = schema.fields();
        DbaseRecord::new(vec![
            DbaseFieldValue::new(fields[0].clone(), DbaseValue::Int32(Some(7))).unwrap(),
            DbaseFieldValue::new(
                fields[1].clone(),
                DbaseValue::Character(Some("Antwerpen".to_string())),
            )
            .unwrap(),
            DbaseFieldValue::new(fields[2].clone(), DbaseValue::Logical(Some(true))).unwrap(),
        ])
    }

    #[test]
    fn test_record_roundtrip() {
        let schema = sample_schema();
        let record = sample_record(&schema);

        let mut bow = ByteOrderWriter::new(vec![]);
        record.write(&mut bow).unwrap();
        let bytes = bow.into_inner();
        assert_eq!(bytes.len(), schema.record_length() as usize);

        let mut bor = ByteOrderReader::new(Cursor::new(bytes));
        let read_back = DbaseRecord::read(&mut bor, &schema).unwrap();
        assert_eq!(read_back, record);
    }

    #[test]
    fn test_deleted_flag_survives() {
        let schema = sample_schema();
        let mut record = sample_record(&schema);
        record.is_deleted = true;

        let mut bow = ByteOrderWriter::new(vec![]);
        record.write(&mut bow).unwrap();
        let bytes = bow.into_inner();
        assert_eq!(bytes[0], b'*');

        let mut bor = ByteOrderReader::new(Cursor::new(bytes));
        assert!(DbaseRecord::read(&mut bor, &schema).unwrap().is_deleted);
    }

    #[test]
    fn test_short_record_is_truncation() {
        let schema = sample_schema();
        let record = sample_record(&schema);
        let mut bow = ByteOrderWriter::new(vec![]);
        record.write(&mut bow).unwrap();
        let mut bytes = bow.into_inner();
        bytes.truncate(bytes.len() - 4);

        let mut bor = ByteOrderReader::new(Cursor::new(bytes));
        assert!(matches!(
            DbaseRecord::read(&mut bor, &schema),
            Err(crate::error::Error::StreamTruncated { .. })
        ));
    }
}
