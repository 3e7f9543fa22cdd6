//! Decoded record geometry

use crate::shape_type::ShapeType;
use crate::types::{BoundingBox2D, Vector2};
use std::fmt;

/// Geometry held by one shapefile record.
///
/// PolyLine and Polygon share the on-disk layout; they differ only in how
/// the serializer wraps them. Whether either is "multi" is decided by the
/// number of parts alone, see [`Geometry::is_multi`].
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Null,
    Point(Vector2),
    MultiPoint {
        bbox: BoundingBox2D,
        points: Vec<Vector2>,
    },
    PolyLine {
        bbox: BoundingBox2D,
        parts: Vec<Vec<Vector2>>,
    },
    Polygon {
        bbox: BoundingBox2D,
        rings: Vec<Vec<Vector2>>,
    },
}

impl Geometry {
    /// Shape type this geometry was decoded from.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Geometry::Null => ShapeType::Null,
            Geometry::Point(_) => ShapeType::Point,
            Geometry::MultiPoint { .. } => ShapeType::MultiPoint,
            Geometry::PolyLine { .. } => ShapeType::PolyLine,
            Geometry::Polygon { .. } => ShapeType::Polygon,
        }
    }

    /// Envelope stored with the record. A point is its own envelope.
    pub fn bounding_box(&self) -> Option<BoundingBox2D> {
        match self {
            Geometry::Null => None,
            Geometry::Point(p) => Some(BoundingBox2D::from_point(*p)),
            Geometry::MultiPoint { bbox, .. }
            | Geometry::PolyLine { bbox, .. }
            | Geometry::Polygon { bbox, .. } => Some(*bbox),
        }
    }

    /// Number of member geometries: 1 for a point, one per point of a
    /// multipoint, one per part or ring otherwise.
    pub fn num_parts(&self) -> usize {
        match self {
            Geometry::Null => 0,
            Geometry::Point(_) => 1,
            Geometry::MultiPoint { points, .. } => points.len(),
            Geometry::PolyLine { parts, .. } => parts.len(),
            Geometry::Polygon { rings, .. } => rings.len(),
        }
    }

    /// Total number of coordinates.
    pub fn num_points(&self) -> usize {
        match self {
            Geometry::Null => 0,
            Geometry::Point(_) => 1,
            Geometry::MultiPoint { points, .. } => points.len(),
            Geometry::PolyLine { parts, .. } => parts.iter().map(Vec::len).sum(),
            Geometry::Polygon { rings, .. } => rings.iter().map(Vec::len).sum(),
        }
    }

    /// True for multipoints and for lines/polygons with more than one part.
    pub fn is_multi(&self) -> bool {
        match self {
            Geometry::MultiPoint { .. } => true,
            Geometry::PolyLine { parts, .. } => parts.len() > 1,
            Geometry::Polygon { rings, .. } => rings.len() > 1,
            Geometry::Null | Geometry::Point(_) => false,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Geometry::Null)
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::wkt::write_wkt(f, self)
    }
}
