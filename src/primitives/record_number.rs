/*
This code is part of the shapefile_codec library.
Created: 12/02/2026
Last Modified: 05/06/2026
License: MIT
*/
use crate::error::{Error, Result};
use std::fmt;

/// A 1-based record number, immutable once created.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordNumber(i32);

impl RecordNumber {
    /// The number of the first record in any file.
    pub const INITIAL: RecordNumber = RecordNumber(1);

    pub fn new(value: i32) -> Result<RecordNumber> {
        if value < 1 {
            return Err(Error::invalid(
                "record number",
                format!("{} is not strictly positive", value),
            ));
        }
        Ok(RecordNumber(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// The number of the record following this one.
    pub fn next(&self) -> Result<RecordNumber> {
        match self.0.checked_add(1) {
            Some(value) => Ok(RecordNumber(value)),
            None => Err(Error::RecordNumberOverflow),
        }
    }
}

impl fmt::Display for RecordNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The number of records a dBase file header declares.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DbaseRecordCount(i32);

impl DbaseRecordCount {
    pub fn new(value: i32) -> Result<DbaseRecordCount> {
        if value < 0 {
            return Err(Error::invalid(
                "dBase record count",
                format!("{} is negative", value),
            ));
        }
        Ok(DbaseRecordCount(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for DbaseRecordCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The number of geometry records a shapefile holds, as derived from its
/// index file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeRecordCount(i32);

impl ShapeRecordCount {
    pub fn new(value: i32) -> Result<ShapeRecordCount> {
        if value < 0 {
            return Err(Error::invalid(
                "shape record count",
                format!("{} is negative", value),
            ));
        }
        Ok(ShapeRecordCount(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ShapeRecordCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
