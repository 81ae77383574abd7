/*
This code is part of the shapefile_codec library.
Created: 11/02/2026
Last Modified: 11/02/2026
License: MIT
*/

// private sub-modules defined in other files
mod byte_order_reader;
mod byte_order_writer;

// exports identifiers from private sub-modules in the current module namespace
pub use self::byte_order_reader::ByteOrderReader;
pub use self::byte_order_writer::ByteOrderWriter;
