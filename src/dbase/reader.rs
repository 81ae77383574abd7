/*
This code is part of the shapefile_codec library.
Created: 15/02/2026
Last Modified: 12/06/2026
License: MIT

Notes: A forward-only, single-pass walk over the data section of a .dbf
stream. The walk is bounded by the header's declared record count, but a
physically present 0x1a end-of-file marker always ends it cleanly, even
short of that count. A missing marker at physical end of stream is
corruption, not termination. Once an advance fails the iterator is
permanently exhausted; a partial record is never surfaced.
*/
use crate::dbase::field::DbaseSchema;
use crate::dbase::header::DbaseFileHeader;
use crate::dbase::record::{DbaseRecord, END_OF_FILE};
use crate::error::Result;
use crate::primitives::{DbaseRecordCount, RecordNumber};
use crate::utils::ByteOrderReader;
use log::warn;
use std::io::Read;

enum State {
    NotStarted,
    Positioned,
    Exhausted,
}

/// Yields one `DbaseRecord` per advance until the declared record count is
/// consumed, the end-of-file marker is met, or the stream turns out to be
/// corrupt. Owns its reader for its whole lifetime; dropping the iterator
/// releases it.
pub struct DbaseRecordIterator<R: Read> {
    reader: ByteOrderReader<R>,
    schema: DbaseSchema,
    record_count: DbaseRecordCount,
    records_read: i32,
    record_number: RecordNumber,
    state: State,
}

impl<R: Read> DbaseRecordIterator<R> {
    /// Reads the file header from the stream and positions the iterator on
    /// the data section, carrying the header's own schema.
    pub fn open(reader: R) -> Result<(DbaseFileHeader, DbaseRecordIterator<R>)> {
        let mut reader = ByteOrderReader::new(reader);
        let header = DbaseFileHeader::read(&mut reader)?;
        let iterator = DbaseRecordIterator {
            reader,
            schema: header.schema().clone(),
            record_count: header.record_count(),
            records_read: 0,
            record_number: RecordNumber::INITIAL,
            state: State::NotStarted,
        };
        Ok((header, iterator))
    }

    /// Binds a caller-supplied schema instead of reading a header; the
    /// stream must already be positioned at the first record.
    pub fn with_schema(
        reader: R,
        record_count: DbaseRecordCount,
        schema: DbaseSchema,
    ) -> DbaseRecordIterator<R> {
        DbaseRecordIterator {
            reader: ByteOrderReader::new(reader),
            schema,
            record_count,
            records_read: 0,
            record_number: RecordNumber::INITIAL,
            state: State::NotStarted,
        }
    }

    /// `RecordNumber::INITIAL` before the first successful advance; after
    /// that, advanced once per record read.
    pub fn record_number(&self) -> RecordNumber {
        self.record_number
    }

    fn advance(&mut self) -> Result<Option<DbaseRecord>> {
        if self.records_read >= self.record_count.value() {
            return Ok(None);
        }

        // the next byte is either the end-of-file marker or a deletion
        // flag; its absence altogether means the data section was cut off
        let flag = self.reader.read_u8()?;
        if flag == END_OF_FILE {
            if self.records_read < self.record_count.value() {
                warn!(
                    "dBase stream ended after {} of {} declared records",
                    self.records_read, self.record_count
                );
            }
            return Ok(None);
        }

        let record = DbaseRecord::read_values(&mut self.reader, &self.schema, flag)?;
        self.record_number = self.record_number.next()?;
        self.records_read += 1;
        self.state = State::Positioned;
        Ok(Some(record))
    }
}

impl<R: Read> Iterator for DbaseRecordIterator<R> {
    type Item = Result<DbaseRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, State::Exhausted) {
            return None;
        }
        match self.advance() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.state = State::Exhausted;
                None
            }
            Err(err) => {
                self.state = State::Exhausted;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::DbaseRecordIterator;
    use crate::dbase::field::{DbaseField, DbaseSchema};
    use crate::dbase::header::DbaseFileHeader;
    use crate::dbase::record::{DbaseRecord, END_OF_FILE};
    use crate::dbase::value::{DbaseFieldValue, DbaseValue};
    use crate::error::Error;
    use crate::primitives::{DbaseCodePage, DbaseRecordCount, RecordNumber};
    use crate::utils::ByteOrderWriter;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn schema() -> DbaseSchema {
        DbaseSchema::new(vec![DbaseField::number("ID", 6, 0).unwrap()]).unwrap()
    }

    fn header(count: i32) -> DbaseFileHeader {
        DbaseFileHeader::new(
            NaiveDate::from_ymd_opt(2023, 11, 2).unwrap(),
            DbaseCodePage::DosUnitedStates,
            DbaseRecordCount::new(count).unwrap(),
            schema(),
        )
        .unwrap()
    }

    fn record(id: i32) -> DbaseRecord {
        DbaseRecord::new(vec![DbaseFieldValue::new(
            schema().fields()[0].clone(),
            DbaseValue::Int32(Some(id)),
        )
        .unwrap()])
    }

    fn stream(header: &DbaseFileHeader, records: &[DbaseRecord], with_marker: bool) -> Vec<u8> {
        let mut bow = ByteOrderWriter::new(vec![]);
        header.write(&mut bow).unwrap();
        for r in records {
            r.write(&mut bow).unwrap();
        }
        if with_marker {
            bow.write_u8(END_OF_FILE).unwrap();
        }
        bow.into_inner()
    }

    #[test]
    fn test_reads_declared_records() {
        let header = header(2);
        let records = vec![record(1), record(2)];
        let bytes = stream(&header, &records, true);

        let (_, mut it) = DbaseRecordIterator::open(Cursor::new(bytes)).unwrap();
        assert_eq!(it.record_number(), RecordNumber::INITIAL);
        assert_eq!(it.next().unwrap().unwrap(), records[0]);
        assert_eq!(it.record_number(), RecordNumber::INITIAL.next().unwrap());
        assert_eq!(it.next().unwrap().unwrap(), records[1]);
        assert_eq!(it.record_number().value(), 3);
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn test_marker_only_stream_yields_nothing() {
        let header = header(0);
        let bytes = stream(&header, &[], true);
        let (_, mut it) = DbaseRecordIterator::open(Cursor::new(bytes)).unwrap();
        assert!(it.next().is_none());
    }

    #[test]
    fn test_early_marker_ends_cleanly() {
        // header promises 2 records but the marker follows the first
        let header = header(2);
        let bytes = stream(&header, &[record(1)], true);
        let (_, mut it) = DbaseRecordIterator::open(Cursor::new(bytes)).unwrap();
        assert!(it.next().unwrap().is_ok());
        assert!(it.next().is_none());
    }

    #[test]
    fn test_missing_marker_is_truncation() {
        // physical end of stream with no marker byte present
        let header = header(1);
        let bytes = stream(&header, &[], false);
        let (_, mut it) = DbaseRecordIterator::open(Cursor::new(bytes)).unwrap();
        match it.next() {
            Some(Err(Error::StreamTruncated { expected, actual })) => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            other => panic!("expected truncation, got {:?}", other.map(|r| r.map(|_| ()))),
        }
        assert!(it.next().is_none());
    }

    #[test]
    fn test_garbage_tail_faults_and_stays_exhausted() {
        // one full record, then 2 garbage bytes and the marker
        let header = header(2);
        let mut bytes = stream(&header, &[record(1)], false);
        bytes.extend_from_slice(&[0x41, 0x42, END_OF_FILE]);

        let (_, mut it) = DbaseRecordIterator::open(Cursor::new(bytes)).unwrap();
        assert!(it.next().unwrap().is_ok());
        assert!(matches!(
            it.next(),
            Some(Err(Error::StreamTruncated { .. }))
        ));
        // stays at the value reached by the one successful advance
        assert_eq!(it.record_number(), RecordNumber::INITIAL.next().unwrap());
        assert!(it.next().is_none());
    }

    #[test]
    fn test_with_schema_binds_caller_schema() {
        let records = vec![record(9)];
        let mut bow = ByteOrderWriter::new(vec![]);
        records[0].write(&mut bow).unwrap();
        bow.write_u8(END_OF_FILE).unwrap();

        let mut it = DbaseRecordIterator::with_schema(
            Cursor::new(bow.into_inner()),
            DbaseRecordCount::new(1).unwrap(),
            schema(),
        );
        assert_eq!(it.next().unwrap().unwrap(), records[0]);
        assert!(it.next().is_none());
    }
}
