/*
This code is part of the shapefile_codec library.
Created: 16/02/2026
Last Modified: 16/02/2026
License: MIT

Notes: An extended well-known-binary codec for moving geometries in and
out of the in-memory model. The extension tags the presence of z
ordinates, measures and a spatial reference system id in the high bits of
the geometry type code, the way PostGIS extends WKB. Encoding is
little-endian throughout; the big-endian flavour of WKB is not produced
and not accepted.
*/
use crate::error::{Error, Result};
use crate::structures::{Geometry, GeometryKind, Position};
use crate::utils::{ByteOrderReader, ByteOrderWriter};

const LITTLE_ENDIAN_MARKER: u8 = 0x01;

// counts come straight from the buffer, so preallocation is bounded and
// the vectors grow as elements actually arrive
const MAX_PREALLOCATION: usize = 4096;

const TYPE_POINT: u32 = 1;
const TYPE_LINE_STRING: u32 = 2;
const TYPE_POLYGON: u32 = 3;
const TYPE_MULTI_POINT: u32 = 4;

const FLAG_Z: u32 = 0x8000_0000;
const FLAG_M: u32 = 0x4000_0000;
const FLAG_SRID: u32 = 0x2000_0000;

/// Encodes geometries into extended WKB buffers.
pub struct WellKnownBinaryWriter;

impl WellKnownBinaryWriter {
    pub fn write(geometry: &Geometry) -> Result<Vec<u8>> {
        let mut writer = ByteOrderWriter::new(Vec::new());
        let has_z = geometry.has_z();
        let has_m = geometry.has_m();
        write_prologue(
            &mut writer,
            base_type(&geometry.kind),
            has_z,
            has_m,
            geometry.srid,
        )?;
        match &geometry.kind {
            GeometryKind::Point(p) => {
                write_position(&mut writer, p, has_z, has_m)?;
            }
            GeometryKind::LineString(positions) => {
                write_positions(&mut writer, positions, has_z, has_m)?;
            }
            GeometryKind::Polygon(rings) => {
                writer.write_u32_le(rings.len() as u32)?;
                for ring in rings {
                    write_positions(&mut writer, ring, has_z, has_m)?;
                }
            }
            GeometryKind::MultiPoint(positions) => {
                // each member point is a complete nested geometry, minus
                // the srid which belongs to the collection alone
                writer.write_u32_le(positions.len() as u32)?;
                for p in positions {
                    write_prologue(&mut writer, TYPE_POINT, has_z, has_m, None)?;
                    write_position(&mut writer, p, has_z, has_m)?;
                }
            }
        }
        Ok(writer.into_inner())
    }
}

/// Decodes extended WKB buffers back into geometries.
pub struct WellKnownBinaryReader;

impl WellKnownBinaryReader {
    pub fn read(bytes: &[u8]) -> Result<Geometry> {
        let mut reader = ByteOrderReader::new(bytes);
        let (base, has_z, has_m, srid) = read_prologue(&mut reader, true)?;
        let kind = match base {
            TYPE_POINT => GeometryKind::Point(read_position(&mut reader, has_z, has_m)?),
            TYPE_LINE_STRING => {
                GeometryKind::LineString(read_positions(&mut reader, has_z, has_m)?)
            }
            TYPE_POLYGON => {
                let num_rings = reader.read_u32_le()?;
                let mut rings = Vec::with_capacity((num_rings as usize).min(MAX_PREALLOCATION));
                for _ in 0..num_rings {
                    rings.push(read_positions(&mut reader, has_z, has_m)?);
                }
                GeometryKind::Polygon(rings)
            }
            TYPE_MULTI_POINT => {
                let num_points = reader.read_u32_le()?;
                let mut positions =
                    Vec::with_capacity((num_points as usize).min(MAX_PREALLOCATION));
                for _ in 0..num_points {
                    let (inner_base, inner_z, inner_m, _) = read_prologue(&mut reader, false)?;
                    if inner_base != TYPE_POINT {
                        return Err(Error::MalformedWellKnownBinary(format!(
                            "multipoint member has geometry type {} rather than point",
                            inner_base
                        )));
                    }
                    positions.push(read_position(&mut reader, inner_z, inner_m)?);
                }
                GeometryKind::MultiPoint(positions)
            }
            other => {
                return Err(Error::MalformedWellKnownBinary(format!(
                    "unsupported geometry type {}",
                    other
                )))
            }
        };
        if reader.pos() != bytes.len() {
            return Err(Error::MalformedWellKnownBinary(format!(
                "{} trailing bytes after the geometry",
                bytes.len() - reader.pos()
            )));
        }
        Ok(match srid {
            Some(srid) => Geometry::with_srid(kind, srid),
            None => Geometry::new(kind),
        })
    }
}

fn base_type(kind: &GeometryKind) -> u32 {
    match kind {
        GeometryKind::Point(_) => TYPE_POINT,
        GeometryKind::LineString(_) => TYPE_LINE_STRING,
        GeometryKind::Polygon(_) => TYPE_POLYGON,
        GeometryKind::MultiPoint(_) => TYPE_MULTI_POINT,
    }
}

fn write_prologue(
    writer: &mut ByteOrderWriter<Vec<u8>>,
    base: u32,
    has_z: bool,
    has_m: bool,
    srid: Option<u32>,
) -> Result<()> {
    writer.write_u8(LITTLE_ENDIAN_MARKER)?;
    let mut type_code = base;
    if has_z {
        type_code |= FLAG_Z;
    }
    if has_m {
        type_code |= FLAG_M;
    }
    if srid.is_some() {
        type_code |= FLAG_SRID;
    }
    writer.write_u32_le(type_code)?;
    if let Some(srid) = srid {
        writer.write_u32_le(srid)?;
    }
    Ok(())
}

fn read_prologue<R: std::io::Read>(
    reader: &mut ByteOrderReader<R>,
    srid_allowed: bool,
) -> Result<(u32, bool, bool, Option<u32>)> {
    let order = reader.read_u8()?;
    if order != LITTLE_ENDIAN_MARKER {
        return Err(Error::MalformedWellKnownBinary(format!(
            "byte order marker {:#04x} is not little-endian",
            order
        )));
    }
    let type_code = reader.read_u32_le()?;
    let has_z = type_code & FLAG_Z != 0;
    let has_m = type_code & FLAG_M != 0;
    let has_srid = type_code & FLAG_SRID != 0;
    if has_srid && !srid_allowed {
        return Err(Error::MalformedWellKnownBinary(
            "srid flag on a nested geometry".to_string(),
        ));
    }
    let base = type_code & !(FLAG_Z | FLAG_M | FLAG_SRID);
    let srid = if has_srid {
        Some(reader.read_u32_le()?)
    } else {
        None
    };
    Ok((base, has_z, has_m, srid))
}

fn write_position(
    writer: &mut ByteOrderWriter<Vec<u8>>,
    p: &Position,
    has_z: bool,
    has_m: bool,
) -> Result<()> {
    writer.write_f64_le(p.x)?;
    writer.write_f64_le(p.y)?;
    if has_z {
        let z = p.z.ok_or_else(|| {
            Error::invalid("geometry", "a coordinate is missing its z ordinate")
        })?;
        writer.write_f64_le(z)?;
    }
    if has_m {
        let m = p.m.ok_or_else(|| {
            Error::invalid("geometry", "a coordinate is missing its measure")
        })?;
        writer.write_f64_le(m)?;
    }
    Ok(())
}

fn write_positions(
    writer: &mut ByteOrderWriter<Vec<u8>>,
    positions: &[Position],
    has_z: bool,
    has_m: bool,
) -> Result<()> {
    writer.write_u32_le(positions.len() as u32)?;
    for p in positions {
        write_position(writer, p, has_z, has_m)?;
    }
    Ok(())
}

fn read_position<R: std::io::Read>(
    reader: &mut ByteOrderReader<R>,
    has_z: bool,
    has_m: bool,
) -> Result<Position> {
    let x = reader.read_f64_le()?;
    let y = reader.read_f64_le()?;
    let mut position = Position::new(x, y)?;
    if has_z {
        position = position.with_z(reader.read_f64_le()?)?;
    }
    if has_m {
        position = position.with_m(reader.read_f64_le()?)?;
    }
    Ok(position)
}

fn read_positions<R: std::io::Read>(
    reader: &mut ByteOrderReader<R>,
    has_z: bool,
    has_m: bool,
) -> Result<Vec<Position>> {
    let count = reader.read_u32_le()?;
    let mut positions = Vec::with_capacity((count as usize).min(MAX_PREALLOCATION));
    for _ in 0..count {
        positions.push(read_position(reader, has_z, has_m)?);
    }
    Ok(positions)
}
