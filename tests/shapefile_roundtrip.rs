/*
This code is part of the shapefile_codec library.
Created: 16/02/2026
Last Modified: 16/02/2026
License: MIT
*/
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use shapefile_codec::shapefile::{
    MultiPointZContent, PolyContent, ShapeContent, ShapeFileHeader, ShapeIndexIterator,
    ShapeIndexRecord, ShapeRecord, ShapeRecordIterator, ShapeType,
};
use shapefile_codec::structures::{BoundingBox2D, BoundingBox3D, Point2D};
use shapefile_codec::utils::{ByteOrderReader, ByteOrderWriter};
use shapefile_codec::{Error, RecordNumber};
use std::io::Cursor;

fn random_points(rng: &mut SmallRng, count: usize) -> Vec<Point2D> {
    (0..count)
        .map(|_| Point2D::new(rng.gen_range(-180.0, 180.0), rng.gen_range(-90.0, 90.0)))
        .collect()
}

/// Frames `contents` into numbered records and serializes a complete .shp
/// stream whose declared file length covers exactly those records.
fn shp_stream(shape_type: ShapeType, contents: Vec<ShapeContent>, extra: &[u8]) -> Vec<u8> {
    let mut number = RecordNumber::INITIAL;
    let mut records = Vec::with_capacity(contents.len());
    for content in contents {
        records.push(content.record_as(number));
        number = number.next().unwrap();
    }
    let mut file_length = ShapeFileHeader::LENGTH;
    for r in &records {
        file_length = file_length.plus(r.length());
    }
    let header = ShapeFileHeader::new(file_length, shape_type, BoundingBox3D::EMPTY);

    let mut writer = ByteOrderWriter::new(vec![]);
    header.write(&mut writer).unwrap();
    for r in &records {
        r.write(&mut writer).unwrap();
    }
    writer.write_bytes(extra).unwrap();
    writer.into_inner()
}

fn read_all(bytes: Vec<u8>) -> Vec<ShapeRecord> {
    let (_, iterator) = ShapeRecordIterator::open(Cursor::new(bytes)).unwrap();
    iterator.map(|r| r.unwrap()).collect()
}

#[test]
fn point_records_roundtrip() {
    let mut rng = SmallRng::seed_from_u64(20260216);
    let contents: Vec<ShapeContent> = random_points(&mut rng, 25)
        .into_iter()
        .map(ShapeContent::Point)
        .collect();
    let bytes = shp_stream(ShapeType::Point, contents.clone(), &[]);
    let records = read_all(bytes);
    assert_eq!(records.len(), 25);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.header.record_number.value(), i as i32 + 1);
        assert_eq!(record.content, contents[i]);
    }
}

#[test]
fn mixed_null_and_point_records_roundtrip() {
    let contents = vec![
        ShapeContent::Point(Point2D::new(1.0, 2.0)),
        ShapeContent::Null,
        ShapeContent::Point(Point2D::new(-3.0, -4.0)),
    ];
    let bytes = shp_stream(ShapeType::Point, contents.clone(), &[]);
    let records = read_all(bytes);
    assert_eq!(records[1].content, ShapeContent::Null);
    assert_eq!(records[1].header.content_length.value(), 2);
    assert_eq!(
        records.into_iter().map(|r| r.content).collect::<Vec<_>>(),
        contents
    );
}

#[test]
fn multipoint_z_roundtrip_preserves_ordinates() {
    let mut rng = SmallRng::seed_from_u64(7);
    let points = random_points(&mut rng, 12);
    let z: Vec<f64> = (0..12).map(|_| rng.gen_range(-100.0, 100.0)).collect();
    let m: Vec<f64> = (0..12).map(|_| rng.gen_range(0.0, 1.0)).collect();
    let content =
        ShapeContent::MultiPointZ(MultiPointZContent::new(points, z, m).unwrap());

    let bytes = shp_stream(ShapeType::MultiPointZ, vec![content.clone()], &[]);
    let records = read_all(bytes);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].content, content);
}

#[test]
fn polygon_roundtrip_with_hole() {
    let shell = vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(10.0, 0.0),
        Point2D::new(10.0, 10.0),
        Point2D::new(0.0, 10.0),
        Point2D::new(0.0, 0.0),
    ];
    let hole = vec![
        Point2D::new(6.0, 6.0),
        Point2D::new(6.0, 8.0),
        Point2D::new(8.0, 8.0),
        Point2D::new(6.0, 6.0),
    ];
    let mut points = shell;
    let hole_start = points.len() as i32;
    points.extend(hole);
    let content =
        ShapeContent::Polygon(PolyContent::new(vec![0, hole_start], points).unwrap());

    let bytes = shp_stream(ShapeType::Polygon, vec![content.clone()], &[]);
    let records = read_all(bytes);
    assert_eq!(records[0].content, content);
    if let ShapeContent::Polygon(poly) = &records[0].content {
        assert_eq!(poly.bounding_box, BoundingBox2D::new(0.0, 0.0, 10.0, 10.0));
    } else {
        panic!("expected a polygon");
    }
}

#[test]
fn declared_length_of_two_records_yields_exactly_two() {
    let contents = vec![
        ShapeContent::Point(Point2D::new(1.0, 1.0)),
        ShapeContent::Point(Point2D::new(2.0, 2.0)),
    ];
    let bytes = shp_stream(ShapeType::Point, contents, &[]);
    let (header, mut iterator) = ShapeRecordIterator::open(Cursor::new(bytes)).unwrap();
    assert_eq!(header.file_length.value(), 50 + 2 * 14);
    assert!(iterator.next().unwrap().is_ok());
    assert!(iterator.next().unwrap().is_ok());
    assert!(iterator.next().is_none());
    assert!(iterator.next().is_none());
}

#[test]
fn trailing_bytes_past_declared_length_are_ignored() {
    let contents = vec![ShapeContent::Point(Point2D::new(5.0, 5.0))];
    let bytes = shp_stream(
        ShapeType::Point,
        contents,
        &[0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09],
    );
    let (_, mut iterator) = ShapeRecordIterator::open(Cursor::new(bytes)).unwrap();
    assert!(iterator.next().unwrap().is_ok());
    assert!(iterator.next().is_none());
}

#[test]
fn stream_shorter_than_declared_length_faults_permanently() {
    let contents = vec![
        ShapeContent::Point(Point2D::new(1.0, 1.0)),
        ShapeContent::Point(Point2D::new(2.0, 2.0)),
    ];
    let mut bytes = shp_stream(ShapeType::Point, contents, &[]);
    bytes.truncate(bytes.len() - 20);

    let (_, mut iterator) = ShapeRecordIterator::open(Cursor::new(bytes)).unwrap();
    assert!(iterator.next().unwrap().is_ok());
    assert!(matches!(
        iterator.next(),
        Some(Err(Error::StreamTruncated { .. }))
    ));
    assert!(iterator.next().is_none());
    assert_eq!(
        iterator.record_number(),
        RecordNumber::INITIAL.next().unwrap()
    );
}

#[test]
fn read_null_rejects_non_null_tags() {
    let mut writer = ByteOrderWriter::new(vec![]);
    ShapeContent::Point(Point2D::new(0.0, 0.0))
        .write(&mut writer)
        .unwrap();
    let mut reader = ByteOrderReader::new(Cursor::new(writer.into_inner()));
    assert!(matches!(
        ShapeContent::read_null(&mut reader),
        Err(Error::UnexpectedShapeType(1))
    ));
}

#[test]
fn multipatch_records_are_not_decodable() {
    // a record framed as MultiPatch: the tag parses, the payload does not
    let mut writer = ByteOrderWriter::new(vec![]);
    let header = ShapeFileHeader::new(
        ShapeFileHeader::LENGTH.plus_words(4 + 2),
        ShapeType::MultiPatch,
        BoundingBox3D::EMPTY,
    );
    header.write(&mut writer).unwrap();
    writer.write_i32_be(1).unwrap(); // record number
    writer.write_i32_be(2).unwrap(); // content length in words
    writer.write_i32_le(31).unwrap(); // MultiPatch tag

    let (_, mut iterator) =
        ShapeRecordIterator::open(Cursor::new(writer.into_inner())).unwrap();
    assert!(matches!(
        iterator.next(),
        Some(Err(Error::UnexpectedShapeType(31)))
    ));
    assert!(iterator.next().is_none());
}

#[test]
fn index_stream_matches_shp_record_layout() {
    let contents = vec![
        ShapeContent::Point(Point2D::new(1.0, 1.0)),
        ShapeContent::Null,
        ShapeContent::Point(Point2D::new(2.0, 2.0)),
    ];
    let shp = shp_stream(ShapeType::Point, contents, &[]);
    let (_, shp_iterator) = ShapeRecordIterator::open(Cursor::new(shp)).unwrap();

    // derive the .shx from the .shp walk
    let mut offset = ShapeIndexRecord::INITIAL_OFFSET;
    let mut entries = Vec::new();
    for record in shp_iterator {
        let record = record.unwrap();
        let entry = record.index_at(offset);
        assert_eq!(entry.content_length, record.header.content_length);
        offset = entry.next_offset();
        entries.push(entry);
    }

    let file_length = ShapeFileHeader::LENGTH
        .plus_words(entries.len() as i32 * ShapeIndexRecord::LENGTH.value());
    let header = ShapeFileHeader::new(file_length, ShapeType::Point, BoundingBox3D::EMPTY);
    let mut writer = ByteOrderWriter::new(vec![]);
    header.write(&mut writer).unwrap();
    for e in &entries {
        e.write(&mut writer).unwrap();
    }

    let (_, index_iterator) =
        ShapeIndexIterator::open(Cursor::new(writer.into_inner())).unwrap();
    let read_entries: Vec<ShapeIndexRecord> = index_iterator.map(|e| e.unwrap()).collect();
    assert_eq!(read_entries, entries);
    assert_eq!(read_entries[0].offset.value(), 50);
    assert_eq!(read_entries[1].offset.value(), 50 + 14);
    assert_eq!(read_entries[2].offset.value(), 50 + 14 + 6);
}
