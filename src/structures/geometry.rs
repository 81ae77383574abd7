/*
This code is part of the shapefile_codec library.
Created: 13/02/2026
Last Modified: 08/06/2026
License: MIT

Notes: The in-memory geometry model the well-known-binary codec translates
to and from. Coordinates are validated at construction: NaN or infinite
ordinates can never enter the model.
*/
use crate::error::{Error, Result};

/// A single coordinate with optional z and measure ordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Result<Position> {
        if !x.is_finite() {
            return Err(Error::invalid("coordinate", format!("x is {}", x)));
        }
        if !y.is_finite() {
            return Err(Error::invalid("coordinate", format!("y is {}", y)));
        }
        Ok(Position {
            x,
            y,
            z: None,
            m: None,
        })
    }

    pub fn with_z(mut self, z: f64) -> Result<Position> {
        if !z.is_finite() {
            return Err(Error::invalid("coordinate", format!("z is {}", z)));
        }
        self.z = Some(z);
        Ok(self)
    }

    pub fn with_m(mut self, m: f64) -> Result<Position> {
        if !m.is_finite() {
            return Err(Error::invalid("coordinate", format!("m is {}", m)));
        }
        self.m = Some(m);
        Ok(self)
    }
}

/// The shape variants the well-known-binary codec understands.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryKind {
    Point(Position),
    LineString(Vec<Position>),
    /// Ring sequences; the first ring is the shell, the rest are holes.
    Polygon(Vec<Vec<Position>>),
    MultiPoint(Vec<Position>),
}

/// A geometry together with its optional spatial reference system id.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    pub srid: Option<u32>,
    pub kind: GeometryKind,
}

impl Geometry {
    pub fn new(kind: GeometryKind) -> Geometry {
        Geometry { srid: None, kind }
    }

    pub fn with_srid(kind: GeometryKind, srid: u32) -> Geometry {
        Geometry {
            srid: Some(srid),
            kind,
        }
    }

    /// Whether any coordinate carries a z ordinate. Dimensionality is
    /// uniform across a geometry, so the first coordinate decides.
    pub fn has_z(&self) -> bool {
        self.first_position().map(|p| p.z.is_some()).unwrap_or(false)
    }

    pub fn has_m(&self) -> bool {
        self.first_position().map(|p| p.m.is_some()).unwrap_or(false)
    }

    fn first_position(&self) -> Option<&Position> {
        match &self.kind {
            GeometryKind::Point(p) => Some(p),
            GeometryKind::LineString(ps) | GeometryKind::MultiPoint(ps) => ps.first(),
            GeometryKind::Polygon(rings) => rings.first().and_then(|r| r.first()),
        }
    }

    /// Equality that treats polygon rings as closed loops: two rings match
    /// when one is a rotation of the other. Non-polygon kinds fall back to
    /// plain equality.
    pub fn equals_topologically(&self, other: &Geometry) -> bool {
        if self.srid != other.srid {
            return false;
        }
        match (&self.kind, &other.kind) {
            (GeometryKind::Polygon(a), GeometryKind::Polygon(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|(ra, rb)| rings_topologically_equal(ra, rb))
            }
            _ => self.kind == other.kind,
        }
    }
}

/// Whether two closed rings trace the same loop, allowing the start vertex
/// to differ. The closing vertex (a repeat of the first) is ignored.
pub fn rings_topologically_equal(a: &[Position], b: &[Position]) -> bool {
    let a = open_ring(a);
    let b = open_ring(b);
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    (0..a.len()).any(|shift| (0..a.len()).all(|i| a[(i + shift) % a.len()] == b[i]))
}

fn open_ring(ring: &[Position]) -> &[Position] {
    if ring.len() > 1 && ring.first() == ring.last() {
        &ring[..ring.len() - 1]
    } else {
        ring
    }
}

/// Tolerant comparison for measure values.
pub fn within_tolerance(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}
