/*
This code is part of the shapefile_codec library.
Created: 15/02/2026
Last Modified: 15/02/2026
License: MIT

Notes: Forward-only, single-pass walks over the record sections of .shp
and .shx streams. The .shp walk is driven by the header's declared file
length in words, never by physical end of stream: bytes past the declared
length are ignored, and a stream that cannot honour the declared length is
corrupt. Once an advance fails the iterator is permanently exhausted.
*/
use crate::error::{Error, Result};
use crate::primitives::{RecordNumber, ShapeRecordCount, WordOffset};
use crate::shapefile::header::ShapeFileHeader;
use crate::shapefile::record::{ShapeIndexRecord, ShapeRecord};
use crate::utils::ByteOrderReader;
use log::warn;
use std::io::Read;

enum State {
    NotStarted,
    Positioned,
    Exhausted,
}

/// Yields one `ShapeRecord` per advance until the header's declared file
/// length is consumed. Owns its reader for its whole lifetime; dropping
/// the iterator releases it.
pub struct ShapeRecordIterator<R: Read> {
    reader: ByteOrderReader<R>,
    header: ShapeFileHeader,
    offset: WordOffset,
    record_number: RecordNumber,
    state: State,
}

impl<R: Read> ShapeRecordIterator<R> {
    /// Reads the 100-byte main header from the stream and positions the
    /// iterator on the first record.
    pub fn open(reader: R) -> Result<(ShapeFileHeader, ShapeRecordIterator<R>)> {
        let mut reader = ByteOrderReader::new(reader);
        let header = ShapeFileHeader::read(&mut reader)?;
        let iterator = ShapeRecordIterator {
            reader,
            header,
            offset: ShapeIndexRecord::INITIAL_OFFSET,
            record_number: RecordNumber::INITIAL,
            state: State::NotStarted,
        };
        Ok((header, iterator))
    }

    /// `RecordNumber::INITIAL` before the first successful advance; after
    /// that, advanced once per record read.
    pub fn record_number(&self) -> RecordNumber {
        self.record_number
    }

    fn advance(&mut self) -> Result<Option<ShapeRecord>> {
        if self.offset.value() >= self.header.file_length.value() {
            // anything physically left past the declared length is not ours
            if self.reader.read_u8().is_ok() {
                warn!(
                    ".shp stream continues past its declared length of {} words",
                    self.header.file_length
                );
            }
            return Ok(None);
        }

        let record = ShapeRecord::read(&mut self.reader)?;
        self.offset = self.offset.plus(record.length());
        self.record_number = self.record_number.next()?;
        self.state = State::Positioned;
        Ok(Some(record))
    }
}

impl<R: Read> Iterator for ShapeRecordIterator<R> {
    type Item = Result<ShapeRecord>;

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

/// Yields one `ShapeIndexRecord` per advance over a .shx stream's fixed
/// 8-byte strides.
pub struct ShapeIndexIterator<R: Read> {
    reader: ByteOrderReader<R>,
    record_count: ShapeRecordCount,
    records_read: i32,
    state: State,
}

impl<R: Read> ShapeIndexIterator<R> {
    /// Reads the 100-byte main header from the stream and derives the
    /// record count from the declared file length.
    pub fn open(reader: R) -> Result<(ShapeFileHeader, ShapeIndexIterator<R>)> {
        let mut reader = ByteOrderReader::new(reader);
        let header = ShapeFileHeader::read(&mut reader)?;
        let record_words = header.file_length.value() - ShapeFileHeader::LENGTH.value();
        if record_words < 0 || record_words % ShapeIndexRecord::LENGTH.value() != 0 {
            return Err(Error::invalid(
                "index file length",
                format!(
                    "{} words leave no whole number of 4-word index records",
                    header.file_length
                ),
            ));
        }
        let record_count =
            ShapeRecordCount::new(record_words / ShapeIndexRecord::LENGTH.value())?;
        let iterator = ShapeIndexIterator {
            reader,
            record_count,
            records_read: 0,
            state: State::NotStarted,
        };
        Ok((header, iterator))
    }

    /// Binds a caller-supplied record count instead of reading a header;
    /// the stream must already be positioned at the first index record.
    pub fn with_count(reader: R, record_count: ShapeRecordCount) -> ShapeIndexIterator<R> {
        ShapeIndexIterator {
            reader: ByteOrderReader::new(reader),
            record_count,
            records_read: 0,
            state: State::NotStarted,
        }
    }

    fn advance(&mut self) -> Result<Option<ShapeIndexRecord>> {
        if self.records_read >= self.record_count.value() {
            return Ok(None);
        }
        let record = ShapeIndexRecord::read(&mut self.reader)?;
        self.records_read += 1;
        self.state = State::Positioned;
        Ok(Some(record))
    }
}

impl<R: Read> Iterator for ShapeIndexIterator<R> {
    type Item = Result<ShapeIndexRecord>;

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
