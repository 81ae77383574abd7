/*
This code is part of the shapefile_codec library.
Created: 12/02/2026
Last Modified: 07/06/2026
License: MIT
*/
use crate::structures::Point2D;

/// An axis-aligned 2-D extent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox2D {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl BoundingBox2D {
    /// The all-zero box.
    pub const EMPTY: BoundingBox2D = BoundingBox2D {
        x_min: 0f64,
        y_min: 0f64,
        x_max: 0f64,
        y_max: 0f64,
    };

    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> BoundingBox2D {
        BoundingBox2D {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Computes the extent of a point set. Returns `EMPTY` for no points.
    pub fn from_points(points: &[Point2D]) -> BoundingBox2D {
        if points.is_empty() {
            return BoundingBox2D::EMPTY;
        }
        let mut bb = BoundingBox2D::new(
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        );
        for p in points {
            if p.x < bb.x_min {
                bb.x_min = p.x;
            }
            if p.x > bb.x_max {
                bb.x_max = p.x;
            }
            if p.y < bb.y_min {
                bb.y_min = p.y;
            }
            if p.y > bb.y_max {
                bb.y_max = p.y;
            }
        }
        bb
    }

    /// Returns the smallest box containing both inputs. Neither input is
    /// mutated.
    pub fn expand_with(&self, other: &BoundingBox2D) -> BoundingBox2D {
        BoundingBox2D {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }
}

/// An axis-aligned extent covering x, y, z and the measure domain, as laid
/// out in a shapefile's 100-byte header.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox3D {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
    pub z_min: f64,
    pub z_max: f64,
    pub m_min: f64,
    pub m_max: f64,
}

impl BoundingBox3D {
    pub const EMPTY: BoundingBox3D = BoundingBox3D {
        x_min: 0f64,
        y_min: 0f64,
        x_max: 0f64,
        y_max: 0f64,
        z_min: 0f64,
        z_max: 0f64,
        m_min: 0f64,
        m_max: 0f64,
    };

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x_min: f64,
        y_min: f64,
        x_max: f64,
        y_max: f64,
        z_min: f64,
        z_max: f64,
        m_min: f64,
        m_max: f64,
    ) -> BoundingBox3D {
        BoundingBox3D {
            x_min,
            y_min,
            x_max,
            y_max,
            z_min,
            z_max,
            m_min,
            m_max,
        }
    }

    pub fn from_2d(bb: BoundingBox2D) -> BoundingBox3D {
        BoundingBox3D {
            x_min: bb.x_min,
            y_min: bb.y_min,
            x_max: bb.x_max,
            y_max: bb.y_max,
            ..BoundingBox3D::EMPTY
        }
    }

    /// Returns the smallest box containing both inputs. Neither input is
    /// mutated.
    pub fn expand_with(&self, other: &BoundingBox3D) -> BoundingBox3D {
        BoundingBox3D {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
            z_min: self.z_min.min(other.z_min),
            z_max: self.z_max.max(other.z_max),
            m_min: self.m_min.min(other.m_min),
            m_max: self.m_max.max(other.m_max),
        }
    }
}

/// The min/max pair over an M-coordinate domain.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MeasureRange {
    pub min: f64,
    pub max: f64,
}

impl MeasureRange {
    /// Represents "no measures present".
    pub const EMPTY: MeasureRange = MeasureRange {
        min: 0f64,
        max: 0f64,
    };

    pub fn new(min: f64, max: f64) -> MeasureRange {
        MeasureRange { min, max }
    }

    /// Computes the min/max over a measure sequence; `EMPTY` when the
    /// sequence is empty.
    pub fn from_measures(measures: &[f64]) -> MeasureRange {
        if measures.is_empty() {
            return MeasureRange::EMPTY;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for m in measures {
            if *m < min {
                min = *m;
            }
            if *m > max {
                max = *m;
            }
        }
        MeasureRange { min, max }
    }
}
