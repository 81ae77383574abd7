/*
This code is part of the shapefile_codec library.
Created: 15/02/2026
Last Modified: 15/02/2026
License: MIT

Notes: The record contents of a .shp file. Every record starts with a
little-endian shape type tag; the payload that follows is little-endian
throughout. The content length reported by each variant counts the tag.
*/
use crate::error::{Error, Result};
use crate::primitives::WordLength;
use crate::structures::{BoundingBox2D, MeasureRange, Point2D};
use crate::utils::{ByteOrderReader, ByteOrderWriter};
use std::io::{Read, Write};

// counts come straight from the stream, so preallocation is bounded and
// the vectors grow as elements actually arrive
const MAX_PREALLOCATION: usize = 4096;

/// The geometry type codes a shapefile can carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ShapeType {
    Null = 0,
    Point = 1,
    PolyLine = 3,
    Polygon = 5,
    MultiPoint = 8,
    PointZ = 11,
    PolyLineZ = 13,
    PolygonZ = 15,
    MultiPointZ = 18,
    PointM = 21,
    PolyLineM = 23,
    PolygonM = 25,
    MultiPointM = 28,
    MultiPatch = 31,
}

impl ShapeType {
    pub fn parse(code: i32) -> Result<ShapeType> {
        match code {
            0 => Ok(ShapeType::Null),
            1 => Ok(ShapeType::Point),
            3 => Ok(ShapeType::PolyLine),
            5 => Ok(ShapeType::Polygon),
            8 => Ok(ShapeType::MultiPoint),
            11 => Ok(ShapeType::PointZ),
            13 => Ok(ShapeType::PolyLineZ),
            15 => Ok(ShapeType::PolygonZ),
            18 => Ok(ShapeType::MultiPointZ),
            21 => Ok(ShapeType::PointM),
            23 => Ok(ShapeType::PolyLineM),
            25 => Ok(ShapeType::PolygonM),
            28 => Ok(ShapeType::MultiPointM),
            31 => Ok(ShapeType::MultiPatch),
            _ => Err(Error::UnexpectedShapeType(code)),
        }
    }

    pub fn code(&self) -> i32 {
        *self as i32
    }
}

/// A point cloud with its precomputed extent.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiPointContent {
    pub bounding_box: BoundingBox2D,
    pub points: Vec<Point2D>,
}

impl MultiPointContent {
    pub fn new(points: Vec<Point2D>) -> MultiPointContent {
        MultiPointContent {
            bounding_box: BoundingBox2D::from_points(&points),
            points,
        }
    }
}

/// A measured point cloud; one measure per point.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiPointMContent {
    pub bounding_box: BoundingBox2D,
    pub points: Vec<Point2D>,
    pub measure_range: MeasureRange,
    pub measures: Vec<f64>,
}

impl MultiPointMContent {
    pub fn new(points: Vec<Point2D>, measures: Vec<f64>) -> Result<MultiPointMContent> {
        if measures.len() != points.len() {
            return Err(Error::invalid(
                "multipoint measures",
                format!("{} measures for {} points", measures.len(), points.len()),
            ));
        }
        Ok(MultiPointMContent {
            bounding_box: BoundingBox2D::from_points(&points),
            points,
            measure_range: MeasureRange::from_measures(&measures),
            measures,
        })
    }
}

/// A point cloud carrying both z-values and measures.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiPointZContent {
    pub bounding_box: BoundingBox2D,
    pub points: Vec<Point2D>,
    pub z_range: MeasureRange,
    pub z_values: Vec<f64>,
    pub measure_range: MeasureRange,
    pub measures: Vec<f64>,
}

impl MultiPointZContent {
    pub fn new(
        points: Vec<Point2D>,
        z_values: Vec<f64>,
        measures: Vec<f64>,
    ) -> Result<MultiPointZContent> {
        if z_values.len() != points.len() || measures.len() != points.len() {
            return Err(Error::invalid(
                "multipoint z-values",
                format!(
                    "{} z-values and {} measures for {} points",
                    z_values.len(),
                    measures.len(),
                    points.len()
                ),
            ));
        }
        Ok(MultiPointZContent {
            bounding_box: BoundingBox2D::from_points(&points),
            points,
            z_range: MeasureRange::from_measures(&z_values),
            z_values,
            measure_range: MeasureRange::from_measures(&measures),
            measures,
        })
    }
}

/// The shared payload of PolyLine and Polygon records: a flat vertex
/// array split into parts by start indices.
#[derive(Clone, Debug, PartialEq)]
pub struct PolyContent {
    pub bounding_box: BoundingBox2D,
    pub parts: Vec<i32>,
    pub points: Vec<Point2D>,
}

impl PolyContent {
    pub fn new(parts: Vec<i32>, points: Vec<Point2D>) -> Result<PolyContent> {
        validate_parts(&parts, points.len())?;
        Ok(PolyContent {
            bounding_box: BoundingBox2D::from_points(&points),
            parts,
            points,
        })
    }
}

/// A measured poly payload; one measure per vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct PolyMContent {
    pub bounding_box: BoundingBox2D,
    pub parts: Vec<i32>,
    pub points: Vec<Point2D>,
    pub measure_range: MeasureRange,
    pub measures: Vec<f64>,
}

impl PolyMContent {
    pub fn new(parts: Vec<i32>, points: Vec<Point2D>, measures: Vec<f64>) -> Result<PolyMContent> {
        validate_parts(&parts, points.len())?;
        if measures.len() != points.len() {
            return Err(Error::invalid(
                "poly measures",
                format!("{} measures for {} points", measures.len(), points.len()),
            ));
        }
        Ok(PolyMContent {
            bounding_box: BoundingBox2D::from_points(&points),
            parts,
            points,
            measure_range: MeasureRange::from_measures(&measures),
            measures,
        })
    }
}

/// A poly payload carrying both z-values and measures per vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct PolyZContent {
    pub bounding_box: BoundingBox2D,
    pub parts: Vec<i32>,
    pub points: Vec<Point2D>,
    pub z_range: MeasureRange,
    pub z_values: Vec<f64>,
    pub measure_range: MeasureRange,
    pub measures: Vec<f64>,
}

impl PolyZContent {
    pub fn new(
        parts: Vec<i32>,
        points: Vec<Point2D>,
        z_values: Vec<f64>,
        measures: Vec<f64>,
    ) -> Result<PolyZContent> {
        validate_parts(&parts, points.len())?;
        if z_values.len() != points.len() || measures.len() != points.len() {
            return Err(Error::invalid(
                "poly z-values",
                format!(
                    "{} z-values and {} measures for {} points",
                    z_values.len(),
                    measures.len(),
                    points.len()
                ),
            ));
        }
        Ok(PolyZContent {
            bounding_box: BoundingBox2D::from_points(&points),
            parts,
            points,
            z_range: MeasureRange::from_measures(&z_values),
            z_values,
            measure_range: MeasureRange::from_measures(&measures),
            measures,
        })
    }
}

fn validate_parts(parts: &[i32], num_points: usize) -> Result<()> {
    if parts.is_empty() {
        return Err(Error::invalid("poly parts", "no part start indices"));
    }
    if parts[0] != 0 {
        return Err(Error::invalid(
            "poly parts",
            format!("first part starts at {} rather than 0", parts[0]),
        ));
    }
    for pair in parts.windows(2) {
        if pair[1] <= pair[0] {
            return Err(Error::invalid(
                "poly parts",
                format!("part starting at {} follows one at {}", pair[1], pair[0]),
            ));
        }
    }
    let last = parts[parts.len() - 1];
    if last as usize >= num_points {
        return Err(Error::invalid(
            "poly parts",
            format!("part starts at {} but only {} points exist", last, num_points),
        ));
    }
    Ok(())
}

/// The content of one .shp record, one variant per supported shape type.
///
/// `MultiPatch` is recognised as a type tag but its payload is not
/// decodable; reading one fails with `UnexpectedShapeType`.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeContent {
    Null,
    Point(Point2D),
    PointM { point: Point2D, m: f64 },
    PointZ { point: Point2D, z: f64, m: f64 },
    MultiPoint(MultiPointContent),
    MultiPointM(MultiPointMContent),
    MultiPointZ(MultiPointZContent),
    PolyLine(PolyContent),
    PolyLineM(PolyMContent),
    PolyLineZ(PolyZContent),
    Polygon(PolyContent),
    PolygonM(PolyMContent),
    PolygonZ(PolyZContent),
}

impl ShapeContent {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            ShapeContent::Null => ShapeType::Null,
            ShapeContent::Point(_) => ShapeType::Point,
            ShapeContent::PointM { .. } => ShapeType::PointM,
            ShapeContent::PointZ { .. } => ShapeType::PointZ,
            ShapeContent::MultiPoint(_) => ShapeType::MultiPoint,
            ShapeContent::MultiPointM(_) => ShapeType::MultiPointM,
            ShapeContent::MultiPointZ(_) => ShapeType::MultiPointZ,
            ShapeContent::PolyLine(_) => ShapeType::PolyLine,
            ShapeContent::PolyLineM(_) => ShapeType::PolyLineM,
            ShapeContent::PolyLineZ(_) => ShapeType::PolyLineZ,
            ShapeContent::Polygon(_) => ShapeType::Polygon,
            ShapeContent::PolygonM(_) => ShapeType::PolygonM,
            ShapeContent::PolygonZ(_) => ShapeType::PolygonZ,
        }
    }

    /// The encoded length in 16-bit words, shape type tag included.
    pub fn content_length(&self) -> WordLength {
        let bytes = match self {
            ShapeContent::Null => 4,
            ShapeContent::Point(_) => 20,
            ShapeContent::PointM { .. } => 28,
            ShapeContent::PointZ { .. } => 36,
            ShapeContent::MultiPoint(c) => 40 + 16 * c.points.len(),
            ShapeContent::MultiPointM(c) => 56 + 24 * c.points.len(),
            ShapeContent::MultiPointZ(c) => 72 + 32 * c.points.len(),
            ShapeContent::PolyLine(c) | ShapeContent::Polygon(c) => {
                44 + 4 * c.parts.len() + 16 * c.points.len()
            }
            ShapeContent::PolyLineM(c) | ShapeContent::PolygonM(c) => {
                60 + 4 * c.parts.len() + 24 * c.points.len()
            }
            ShapeContent::PolyLineZ(c) | ShapeContent::PolygonZ(c) => {
                76 + 4 * c.parts.len() + 32 * c.points.len()
            }
        };
        WordLength::from_words((bytes / 2) as i32)
    }

    pub fn write<W: Write>(&self, writer: &mut ByteOrderWriter<W>) -> Result<()> {
        writer.write_i32_le(self.shape_type().code())?;
        match self {
            ShapeContent::Null => {}
            ShapeContent::Point(p) => {
                write_point(writer, p)?;
            }
            ShapeContent::PointM { point, m } => {
                write_point(writer, point)?;
                writer.write_f64_le(*m)?;
            }
            ShapeContent::PointZ { point, z, m } => {
                write_point(writer, point)?;
                writer.write_f64_le(*z)?;
                writer.write_f64_le(*m)?;
            }
            ShapeContent::MultiPoint(c) => {
                write_box(writer, &c.bounding_box)?;
                writer.write_i32_le(c.points.len() as i32)?;
                write_points(writer, &c.points)?;
            }
            ShapeContent::MultiPointM(c) => {
                write_box(writer, &c.bounding_box)?;
                writer.write_i32_le(c.points.len() as i32)?;
                write_points(writer, &c.points)?;
                write_measures(writer, &c.measure_range, &c.measures)?;
            }
            ShapeContent::MultiPointZ(c) => {
                write_box(writer, &c.bounding_box)?;
                writer.write_i32_le(c.points.len() as i32)?;
                write_points(writer, &c.points)?;
                write_measures(writer, &c.z_range, &c.z_values)?;
                write_measures(writer, &c.measure_range, &c.measures)?;
            }
            ShapeContent::PolyLine(c) | ShapeContent::Polygon(c) => {
                write_poly_prologue(writer, &c.bounding_box, &c.parts, c.points.len())?;
                write_points(writer, &c.points)?;
            }
            ShapeContent::PolyLineM(c) | ShapeContent::PolygonM(c) => {
                write_poly_prologue(writer, &c.bounding_box, &c.parts, c.points.len())?;
                write_points(writer, &c.points)?;
                write_measures(writer, &c.measure_range, &c.measures)?;
            }
            ShapeContent::PolyLineZ(c) | ShapeContent::PolygonZ(c) => {
                write_poly_prologue(writer, &c.bounding_box, &c.parts, c.points.len())?;
                write_points(writer, &c.points)?;
                write_measures(writer, &c.z_range, &c.z_values)?;
                write_measures(writer, &c.measure_range, &c.measures)?;
            }
        }
        Ok(())
    }

    /// Reads the content of any supported shape type, tag included.
    pub fn read<R: Read>(reader: &mut ByteOrderReader<R>) -> Result<ShapeContent> {
        let code = reader.read_i32_le()?;
        match ShapeType::parse(code)? {
            ShapeType::Null => Ok(ShapeContent::Null),
            ShapeType::Point => Ok(ShapeContent::Point(read_point(reader)?)),
            ShapeType::PointM => {
                let point = read_point(reader)?;
                let m = reader.read_f64_le()?;
                Ok(ShapeContent::PointM { point, m })
            }
            ShapeType::PointZ => {
                let point = read_point(reader)?;
                let z = reader.read_f64_le()?;
                let m = reader.read_f64_le()?;
                Ok(ShapeContent::PointZ { point, z, m })
            }
            ShapeType::MultiPoint => {
                let bounding_box = read_box(reader)?;
                let num_points = read_count(reader, "number of points")?;
                let points = read_points(reader, num_points)?;
                Ok(ShapeContent::MultiPoint(MultiPointContent {
                    bounding_box,
                    points,
                }))
            }
            ShapeType::MultiPointM => {
                let bounding_box = read_box(reader)?;
                let num_points = read_count(reader, "number of points")?;
                let points = read_points(reader, num_points)?;
                let (measure_range, measures) = read_measures(reader, num_points)?;
                Ok(ShapeContent::MultiPointM(MultiPointMContent {
                    bounding_box,
                    points,
                    measure_range,
                    measures,
                }))
            }
            ShapeType::MultiPointZ => {
                let bounding_box = read_box(reader)?;
                let num_points = read_count(reader, "number of points")?;
                let points = read_points(reader, num_points)?;
                let (z_range, z_values) = read_measures(reader, num_points)?;
                let (measure_range, measures) = read_measures(reader, num_points)?;
                Ok(ShapeContent::MultiPointZ(MultiPointZContent {
                    bounding_box,
                    points,
                    z_range,
                    z_values,
                    measure_range,
                    measures,
                }))
            }
            ShapeType::PolyLine => {
                let c = read_poly(reader)?;
                Ok(ShapeContent::PolyLine(c))
            }
            ShapeType::Polygon => {
                let c = read_poly(reader)?;
                Ok(ShapeContent::Polygon(c))
            }
            ShapeType::PolyLineM => {
                let c = read_poly_m(reader)?;
                Ok(ShapeContent::PolyLineM(c))
            }
            ShapeType::PolygonM => {
                let c = read_poly_m(reader)?;
                Ok(ShapeContent::PolygonM(c))
            }
            ShapeType::PolyLineZ => {
                let c = read_poly_z(reader)?;
                Ok(ShapeContent::PolyLineZ(c))
            }
            ShapeType::PolygonZ => {
                let c = read_poly_z(reader)?;
                Ok(ShapeContent::PolygonZ(c))
            }
            ShapeType::MultiPatch => Err(Error::UnexpectedShapeType(code)),
        }
    }

    /// Reads content that must be a null shape; any other tag fails.
    pub fn read_null<R: Read>(reader: &mut ByteOrderReader<R>) -> Result<ShapeContent> {
        let code = reader.read_i32_le()?;
        if code != ShapeType::Null.code() {
            return Err(Error::UnexpectedShapeType(code));
        }
        Ok(ShapeContent::Null)
    }
}

fn write_point<W: Write>(writer: &mut ByteOrderWriter<W>, p: &Point2D) -> Result<()> {
    writer.write_f64_le(p.x)?;
    writer.write_f64_le(p.y)
}

fn write_points<W: Write>(writer: &mut ByteOrderWriter<W>, points: &[Point2D]) -> Result<()> {
    for p in points {
        write_point(writer, p)?;
    }
    Ok(())
}

fn write_box<W: Write>(writer: &mut ByteOrderWriter<W>, bb: &BoundingBox2D) -> Result<()> {
    writer.write_f64_le(bb.x_min)?;
    writer.write_f64_le(bb.y_min)?;
    writer.write_f64_le(bb.x_max)?;
    writer.write_f64_le(bb.y_max)
}

fn write_measures<W: Write>(
    writer: &mut ByteOrderWriter<W>,
    range: &MeasureRange,
    values: &[f64],
) -> Result<()> {
    writer.write_f64_le(range.min)?;
    writer.write_f64_le(range.max)?;
    for v in values {
        writer.write_f64_le(*v)?;
    }
    Ok(())
}

fn write_poly_prologue<W: Write>(
    writer: &mut ByteOrderWriter<W>,
    bb: &BoundingBox2D,
    parts: &[i32],
    num_points: usize,
) -> Result<()> {
    write_box(writer, bb)?;
    writer.write_i32_le(parts.len() as i32)?;
    writer.write_i32_le(num_points as i32)?;
    for part in parts {
        writer.write_i32_le(*part)?;
    }
    Ok(())
}

fn read_point<R: Read>(reader: &mut ByteOrderReader<R>) -> Result<Point2D> {
    let x = reader.read_f64_le()?;
    let y = reader.read_f64_le()?;
    Ok(Point2D::new(x, y))
}

fn read_points<R: Read>(reader: &mut ByteOrderReader<R>, count: usize) -> Result<Vec<Point2D>> {
    let mut points = Vec::with_capacity(count.min(MAX_PREALLOCATION));
    for _ in 0..count {
        points.push(read_point(reader)?);
    }
    Ok(points)
}

fn read_box<R: Read>(reader: &mut ByteOrderReader<R>) -> Result<BoundingBox2D> {
    Ok(BoundingBox2D::new(
        reader.read_f64_le()?,
        reader.read_f64_le()?,
        reader.read_f64_le()?,
        reader.read_f64_le()?,
    ))
}

fn read_count<R: Read>(reader: &mut ByteOrderReader<R>, what: &'static str) -> Result<usize> {
    let count = reader.read_i32_le()?;
    if count < 0 {
        return Err(Error::invalid(what, format!("{} is negative", count)));
    }
    Ok(count as usize)
}

fn read_measures<R: Read>(
    reader: &mut ByteOrderReader<R>,
    count: usize,
) -> Result<(MeasureRange, Vec<f64>)> {
    let min = reader.read_f64_le()?;
    let max = reader.read_f64_le()?;
    let mut values = Vec::with_capacity(count.min(MAX_PREALLOCATION));
    for _ in 0..count {
        values.push(reader.read_f64_le()?);
    }
    Ok((MeasureRange::new(min, max), values))
}

fn read_poly<R: Read>(reader: &mut ByteOrderReader<R>) -> Result<PolyContent> {
    let bounding_box = read_box(reader)?;
    let num_parts = read_count(reader, "number of parts")?;
    let num_points = read_count(reader, "number of points")?;
    let mut parts = Vec::with_capacity(num_parts.min(MAX_PREALLOCATION));
    for _ in 0..num_parts {
        parts.push(reader.read_i32_le()?);
    }
    let points = read_points(reader, num_points)?;
    Ok(PolyContent {
        bounding_box,
        parts,
        points,
    })
}

fn read_poly_m<R: Read>(reader: &mut ByteOrderReader<R>) -> Result<PolyMContent> {
    let base = read_poly(reader)?;
    let (measure_range, measures) = read_measures(reader, base.points.len())?;
    Ok(PolyMContent {
        bounding_box: base.bounding_box,
        parts: base.parts,
        points: base.points,
        measure_range,
        measures,
    })
}

fn read_poly_z<R: Read>(reader: &mut ByteOrderReader<R>) -> Result<PolyZContent> {
    let base = read_poly(reader)?;
    let (z_range, z_values) = read_measures(reader, base.points.len())?;
    let (measure_range, measures) = read_measures(reader, base.points.len())?;
    Ok(PolyZContent {
        bounding_box: base.bounding_box,
        parts: base.parts,
        points: base.points,
        z_range,
        z_values,
        measure_range,
        measures,
    })
}
