/*
This code is part of the shapefile_codec library.
Created: 12/02/2026
Last Modified: 12/02/2026
License: MIT
*/

// private sub-modules defined in other files
mod code_page;
mod lengths;
mod record_number;

// exports identifiers from private sub-modules in the current module namespace
pub use self::code_page::DbaseCodePage;
pub use self::lengths::{ByteLength, WordLength, WordOffset};
pub use self::record_number::{DbaseRecordCount, RecordNumber, ShapeRecordCount};
