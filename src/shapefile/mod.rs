/*
This code is part of the shapefile_codec library.
Created: 15/02/2026
Last Modified: 15/02/2026
License: MIT

Notes: The logic behind working with the ESRI Shapefile format: the .shp
geometry file and the .shx fixed-stride index beside it.
*/

// private sub-modules defined in other files
mod content;
mod header;
mod reader;
mod record;

// exports identifiers from private sub-modules in the current module namespace
pub use self::content::{
    MultiPointContent, MultiPointMContent, MultiPointZContent, PolyContent, PolyMContent,
    PolyZContent, ShapeContent, ShapeType,
};
pub use self::header::ShapeFileHeader;
pub use self::reader::{ShapeIndexIterator, ShapeRecordIterator};
pub use self::record::{ShapeIndexRecord, ShapeRecord, ShapeRecordHeader};
