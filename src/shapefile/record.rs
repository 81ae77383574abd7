/*
This code is part of the shapefile_codec library.
Created: 15/02/2026
Last Modified: 15/02/2026
License: MIT

Notes: The record framing of the .shp file and the fixed-stride records of
the .shx index file. Record headers and index records are big-endian,
unlike the little-endian contents they frame.
*/
use crate::error::Result;
use crate::primitives::{RecordNumber, WordLength, WordOffset};
use crate::shapefile::ShapeContent;
use crate::utils::{ByteOrderReader, ByteOrderWriter};
use std::io::{Read, Write};

/// The 8-byte header preceding each record's content in a .shp file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShapeRecordHeader {
    pub record_number: RecordNumber,
    /// The length of the content that follows, in 16-bit words.
    pub content_length: WordLength,
}

impl ShapeRecordHeader {
    /// The header's own length: 8 bytes.
    pub const LENGTH: WordLength = WordLength::from_words(4);

    pub fn write<W: Write>(&self, writer: &mut ByteOrderWriter<W>) -> Result<()> {
        writer.write_i32_be(self.record_number.value())?;
        writer.write_i32_be(self.content_length.value())
    }

    pub fn read<R: Read>(reader: &mut ByteOrderReader<R>) -> Result<ShapeRecordHeader> {
        let record_number = RecordNumber::new(reader.read_i32_be()?)?;
        let content_length = WordLength::new(reader.read_i32_be()?)?;
        Ok(ShapeRecordHeader {
            record_number,
            content_length,
        })
    }
}

/// One complete .shp record: framing header plus geometry content.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeRecord {
    pub header: ShapeRecordHeader,
    pub content: ShapeContent,
}

impl ShapeRecord {
    /// The record's total encoded length, header and content.
    pub fn length(&self) -> WordLength {
        ShapeRecordHeader::LENGTH.plus(self.header.content_length)
    }

    /// The .shx entry describing this record when it starts at `offset`.
    pub fn index_at(&self, offset: WordOffset) -> ShapeIndexRecord {
        ShapeIndexRecord {
            offset,
            content_length: self.header.content_length,
        }
    }

    pub fn write<W: Write>(&self, writer: &mut ByteOrderWriter<W>) -> Result<()> {
        self.header.write(writer)?;
        self.content.write(writer)
    }

    pub fn read<R: Read>(reader: &mut ByteOrderReader<R>) -> Result<ShapeRecord> {
        let header = ShapeRecordHeader::read(reader)?;
        let content = ShapeContent::read(reader)?;
        Ok(ShapeRecord { header, content })
    }
}

impl ShapeContent {
    /// Frames this content as the record carrying `record_number`.
    pub fn record_as(self, record_number: RecordNumber) -> ShapeRecord {
        let content_length = self.content_length();
        ShapeRecord {
            header: ShapeRecordHeader {
                record_number,
                content_length,
            },
            content: self,
        }
    }
}

/// One 8-byte .shx entry: where a record starts and how long its content is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShapeIndexRecord {
    /// The record's start offset from the beginning of the .shp file, in
    /// 16-bit words.
    pub offset: WordOffset,
    pub content_length: WordLength,
}

impl ShapeIndexRecord {
    /// Where the first record of any .shp file starts: right after the
    /// 100-byte main header.
    pub const INITIAL_OFFSET: WordOffset = WordOffset::from_words(50);

    /// Each index record's own length: 8 bytes.
    pub const LENGTH: WordLength = WordLength::from_words(4);

    pub fn write<W: Write>(&self, writer: &mut ByteOrderWriter<W>) -> Result<()> {
        writer.write_i32_be(self.offset.value())?;
        writer.write_i32_be(self.content_length.value())
    }

    pub fn read<R: Read>(reader: &mut ByteOrderReader<R>) -> Result<ShapeIndexRecord> {
        let offset = WordOffset::new(reader.read_i32_be()?)?;
        let content_length = WordLength::new(reader.read_i32_be()?)?;
        Ok(ShapeIndexRecord {
            offset,
            content_length,
        })
    }

    /// The offset at which the record following this one starts.
    pub fn next_offset(&self) -> WordOffset {
        self.offset
            .plus(ShapeRecordHeader::LENGTH)
            .plus(self.content_length)
    }
}

#[cfg(test)]
mod test {
    use super::{ShapeIndexRecord, ShapeRecord, ShapeRecordHeader};
    use crate::primitives::{RecordNumber, WordLength, WordOffset};
    use crate::shapefile::ShapeContent;
    use crate::structures::Point2D;
    use crate::utils::{ByteOrderReader, ByteOrderWriter};
    use std::io::Cursor;

    #[test]
    fn test_record_roundtrip() {
        let record =
            ShapeContent::Point(Point2D::new(4.5, -9.0)).record_as(RecordNumber::INITIAL);
        assert_eq!(record.header.content_length.value(), 10);
        assert_eq!(record.length().value(), 14);

        let mut writer = ByteOrderWriter::new(Vec::new());
        record.write(&mut writer).unwrap();
        let bytes = writer.into_inner();
        assert_eq!(bytes.len(), 28);
        // record number 1 big-endian
        assert_eq!(&bytes[0..4], &[0x00, 0x00, 0x00, 0x01]);
        // content length 10 big-endian
        assert_eq!(&bytes[4..8], &[0x00, 0x00, 0x00, 0x0a]);
        // shape type 1 little-endian
        assert_eq!(&bytes[8..12], &[0x01, 0x00, 0x00, 0x00]);

        let mut reader = ByteOrderReader::new(Cursor::new(bytes));
        assert_eq!(ShapeRecord::read(&mut reader).unwrap(), record);
    }

    #[test]
    fn test_index_at_and_next_offset() {
        let record =
            ShapeContent::Point(Point2D::new(0.0, 0.0)).record_as(RecordNumber::INITIAL);
        let index = record.index_at(ShapeIndexRecord::INITIAL_OFFSET);
        assert_eq!(index.offset, WordOffset::new(50).unwrap());
        assert_eq!(index.content_length, WordLength::new(10).unwrap());
        assert_eq!(index.next_offset(), WordOffset::new(64).unwrap());
    }

    #[test]
    fn test_index_record_roundtrip() {
        let index = ShapeIndexRecord {
            offset: WordOffset::new(50).unwrap(),
            content_length: WordLength::new(2).unwrap(),
        };
        let mut writer = ByteOrderWriter::new(Vec::new());
        index.write(&mut writer).unwrap();
        let bytes = writer.into_inner();
        assert_eq!(bytes, vec![0x00, 0x00, 0x00, 0x32, 0x00, 0x00, 0x00, 0x02]);

        let mut reader = ByteOrderReader::new(Cursor::new(bytes));
        assert_eq!(ShapeIndexRecord::read(&mut reader).unwrap(), index);
    }

    #[test]
    fn test_header_rejects_invalid_values() {
        // record number 0 and negative content length are both invalid
        let mut writer = ByteOrderWriter::new(Vec::new());
        writer.write_i32_be(0).unwrap();
        writer.write_i32_be(2).unwrap();
        let mut reader = ByteOrderReader::new(Cursor::new(writer.into_inner()));
        assert!(ShapeRecordHeader::read(&mut reader).is_err());

        let mut writer = ByteOrderWriter::new(Vec::new());
        writer.write_i32_be(1).unwrap();
        writer.write_i32_be(-2).unwrap();
        let mut reader = ByteOrderReader::new(Cursor::new(writer.into_inner()));
        assert!(ShapeRecordHeader::read(&mut reader).is_err());
    }
}
