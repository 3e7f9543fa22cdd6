//! Shape type codes.
//!
//! Every shapefile header and record carries a little-endian `i32` naming
//! the kind of geometry it holds. Fourteen codes are defined by the format;
//! only the planar X/Y kinds are decoded, the Z, M and MultiPatch kinds are
//! recognized and skipped.

use std::fmt;

/// Shape type of a file header or a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Null,
    Point,
    PolyLine,
    Polygon,
    MultiPoint,
    PointZ,
    PolyLineZ,
    PolygonZ,
    MultiPointZ,
    PointM,
    PolyLineM,
    PolygonM,
    MultiPointM,
    MultiPatch,
    /// A code outside the defined set, kept as read.
    Unknown(i32),
}

impl ShapeType {
    /// Map a raw code to a shape type. Never fails.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Null,
            1 => Self::Point,
            3 => Self::PolyLine,
            5 => Self::Polygon,
            8 => Self::MultiPoint,
            11 => Self::PointZ,
            13 => Self::PolyLineZ,
            15 => Self::PolygonZ,
            18 => Self::MultiPointZ,
            21 => Self::PointM,
            23 => Self::PolyLineM,
            25 => Self::PolygonM,
            28 => Self::MultiPointM,
            31 => Self::MultiPatch,
            other => Self::Unknown(other),
        }
    }

    /// The on-disk code.
    pub fn code(&self) -> i32 {
        match self {
            Self::Null => 0,
            Self::Point => 1,
            Self::PolyLine => 3,
            Self::Polygon => 5,
            Self::MultiPoint => 8,
            Self::PointZ => 11,
            Self::PolyLineZ => 13,
            Self::PolygonZ => 15,
            Self::MultiPointZ => 18,
            Self::PointM => 21,
            Self::PolyLineM => 23,
            Self::PolygonM => 25,
            Self::MultiPointM => 28,
            Self::MultiPatch => 31,
            Self::Unknown(code) => *code,
        }
    }

    /// Human-readable name used by the format documentation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Null => "Null Shape",
            Self::Point => "Point",
            Self::PolyLine => "PolyLine",
            Self::Polygon => "Polygon",
            Self::MultiPoint => "MultiPoint",
            Self::PointZ => "PointZ",
            Self::PolyLineZ => "PolyLineZ",
            Self::PolygonZ => "PolygonZ",
            Self::MultiPointZ => "MultiPointZ",
            Self::PointM => "PointM",
            Self::PolyLineM => "PolyLineM",
            Self::PolygonM => "PolygonM",
            Self::MultiPointM => "MultiPointM",
            Self::MultiPatch => "MultiPatch",
            Self::Unknown(_) => "Unknown",
        }
    }

    /// Whether the code belongs to the defined set.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Whether records of this type are decoded into a geometry.
    pub fn is_supported(&self) -> bool {
        matches!(
            self,
            Self::Null | Self::Point | Self::PolyLine | Self::Polygon | Self::MultiPoint
        )
    }
}

impl From<i32> for ShapeType {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(code) => write!(f, "Unknown({})", code),
            other => f.write_str(other.name()),
        }
    }
}
