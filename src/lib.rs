/*
This code is part of the shapefile_codec library.
Created: 11/02/2026
Last Modified: 16/02/2026
License: MIT
*/

//! A codec library for the ESRI Shapefile family of legacy geospatial
//! binary formats: the .shp geometry file, its fixed-stride .shx index,
//! the dBase .dbf attribute table, and an extended well-known-binary
//! encoding for moving geometries in and out of the in-memory model.
//!
//! Reading is forward-only and single-pass. Each file format pairs a
//! header type with a record iterator that owns its stream; a failed
//! advance permanently exhausts the iterator rather than exposing a
//! partial record.

pub mod dbase;
pub mod error;
pub mod primitives;
pub mod shapefile;
pub mod structures;
pub mod utils;
pub mod wkb;

pub use crate::error::{Error, Result};
pub use crate::primitives::{
    ByteLength, DbaseCodePage, DbaseRecordCount, RecordNumber, ShapeRecordCount, WordLength,
    WordOffset,
};
pub use crate::shapefile::{ShapeContent, ShapeFileHeader, ShapeRecord, ShapeType};
pub use crate::structures::{Geometry, GeometryKind, Point2D, Position};
