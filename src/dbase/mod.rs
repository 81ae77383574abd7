/*
This code is part of the shapefile_codec library.
Created: 13/02/2026
Last Modified: 13/02/2026
License: MIT

Notes: The logic behind working with the dBase attribute table format of
the .dbf file that accompanies every shapefile.
*/

// private sub-modules defined in other files
mod field;
mod header;
mod reader;
mod record;
mod value;

// exports identifiers from private sub-modules in the current module namespace
pub use self::field::{DbaseField, DbaseFieldName, DbaseFieldType, DbaseSchema};
pub use self::header::DbaseFileHeader;
pub use self::reader::DbaseRecordIterator;
pub use self::record::{DbaseRecord, END_OF_FILE};
pub use self::value::{DbaseFieldValue, DbaseValue};
