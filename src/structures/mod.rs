/*
This code is part of the shapefile_codec library.
Created: 12/02/2026
Last Modified: 12/02/2026
License: MIT
*/

// private sub-modules defined in other files
mod bounding_box;
mod geometry;
mod point2d;

// exports identifiers from private sub-modules in the current module namespace
pub use self::bounding_box::{BoundingBox2D, BoundingBox3D, MeasureRange};
pub use self::geometry::{rings_topologically_equal, within_tolerance, Geometry, GeometryKind, Position};
pub use self::point2d::Point2D;
