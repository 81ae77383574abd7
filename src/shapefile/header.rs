/*
This code is part of the shapefile_codec library.
Created: 15/02/2026
Last Modified: 15/02/2026
License: MIT

Notes: The fixed 100-byte main file header shared by the .shp and .shx
files. The header mixes byte orders: the file code, reserved words and
file length are big-endian while the version, shape type and extent are
little-endian.
*/
use crate::error::{Error, Result};
use crate::primitives::WordLength;
use crate::shapefile::ShapeType;
use crate::structures::BoundingBox3D;
use crate::utils::{ByteOrderReader, ByteOrderWriter};
use std::io::{Read, Write};

const FILE_CODE: i32 = 9994;
const VERSION: i32 = 1000;

/// The main file header of a .shp or .shx file.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShapeFileHeader {
    /// The total file length, header included, in 16-bit words.
    pub file_length: WordLength,
    /// The single shape type every record in the file carries.
    pub shape_type: ShapeType,
    /// The extent over all records, including the z and measure domains.
    pub bounding_box: BoundingBox3D,
}

impl ShapeFileHeader {
    /// The header's own length: 100 bytes.
    pub const LENGTH: WordLength = WordLength::from_words(50);

    pub fn new(
        file_length: WordLength,
        shape_type: ShapeType,
        bounding_box: BoundingBox3D,
    ) -> ShapeFileHeader {
        ShapeFileHeader {
            file_length,
            shape_type,
            bounding_box,
        }
    }

    pub fn write<W: Write>(&self, writer: &mut ByteOrderWriter<W>) -> Result<()> {
        writer.write_i32_be(FILE_CODE)?;
        for _ in 0..5 {
            writer.write_i32_be(0)?; // reserved
        }
        writer.write_i32_be(self.file_length.value())?;
        writer.write_i32_le(VERSION)?;
        writer.write_i32_le(self.shape_type.code())?;
        writer.write_f64_le(self.bounding_box.x_min)?;
        writer.write_f64_le(self.bounding_box.y_min)?;
        writer.write_f64_le(self.bounding_box.x_max)?;
        writer.write_f64_le(self.bounding_box.y_max)?;
        writer.write_f64_le(self.bounding_box.z_min)?;
        writer.write_f64_le(self.bounding_box.z_max)?;
        writer.write_f64_le(self.bounding_box.m_min)?;
        writer.write_f64_le(self.bounding_box.m_max)?;
        Ok(())
    }

    pub fn read<R: Read>(reader: &mut ByteOrderReader<R>) -> Result<ShapeFileHeader> {
        let file_code = reader.read_i32_be()?;
        if file_code != FILE_CODE {
            return Err(Error::invalid(
                "shapefile header",
                format!("file code is {} rather than {}", file_code, FILE_CODE),
            ));
        }
        reader.skip(20)?; // five reserved words
        let file_length = WordLength::new(reader.read_i32_be()?)?;
        let version = reader.read_i32_le()?;
        if version != VERSION {
            return Err(Error::invalid(
                "shapefile header",
                format!("version is {} rather than {}", version, VERSION),
            ));
        }
        let shape_type = ShapeType::parse(reader.read_i32_le()?)?;
        let bounding_box = BoundingBox3D::new(
            reader.read_f64_le()?,
            reader.read_f64_le()?,
            reader.read_f64_le()?,
            reader.read_f64_le()?,
            reader.read_f64_le()?,
            reader.read_f64_le()?,
            reader.read_f64_le()?,
            reader.read_f64_le()?,
        );
        Ok(ShapeFileHeader {
            file_length,
            shape_type,
            bounding_box,
        })
    }
}
