//! WKT text rendering of decoded geometry.
//!
//! Output is deterministic: every coordinate is written as two fixed-point
//! numbers with six fractional digits separated by one space, and `", "` is
//! the only separator between points and between parts. Rust's float
//! formatting does not depend on the process locale.
//!
//! | Geometry                 | Text                                   |
//! |--------------------------|----------------------------------------|
//! | Point                    | `POINT (x y)`                          |
//! | MultiPoint               | `MULTIPOINT ((x y), (x y))`            |
//! | PolyLine, one part       | `LINESTRING (x y, x y)`                |
//! | PolyLine, several parts  | `MULTILINESTRING ((x y, x y), (x y))`  |
//! | Polygon, one ring        | `POLYGON ((x y, x y))`                 |
//! | Polygon, several rings   | `MULTIPOLYGON ((x y, x y), (x y))`     |
//! | Null                     | empty string                           |
//!
//! A multipoint without points and a line or polygon without parts render
//! with the `EMPTY` keyword.

use crate::geometry::Geometry;
use crate::types::Vector2;
use std::fmt::{self, Write};

/// Render a geometry to a new string.
pub fn to_wkt(geometry: &Geometry) -> String {
    let mut out = String::with_capacity(estimate_len(geometry));
    // Writing into a String cannot fail.
    let _ = write_wkt(&mut out, geometry);
    out
}

/// Render a geometry into any `fmt::Write` sink.
pub fn write_wkt<W: Write>(out: &mut W, geometry: &Geometry) -> fmt::Result {
    match geometry {
        Geometry::Null => Ok(()),
        Geometry::Point(p) => {
            out.write_str("POINT (")?;
            write_coord(out, p)?;
            out.write_char(')')
        }
        Geometry::MultiPoint { points, .. } => {
            if points.is_empty() {
                return out.write_str("MULTIPOINT EMPTY");
            }
            out.write_str("MULTIPOINT (")?;
            for (i, p) in points.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                out.write_char('(')?;
                write_coord(out, p)?;
                out.write_char(')')?;
            }
            out.write_char(')')
        }
        Geometry::PolyLine { parts, .. } => match parts.as_slice() {
            [] => out.write_str("LINESTRING EMPTY"),
            [single] => {
                out.write_str("LINESTRING ")?;
                write_sequence(out, single)
            }
            many => {
                out.write_str("MULTILINESTRING ")?;
                write_parts(out, many)
            }
        },
        Geometry::Polygon { rings, .. } => match rings.as_slice() {
            [] => out.write_str("POLYGON EMPTY"),
            [single] => {
                out.write_str("POLYGON (")?;
                write_sequence(out, single)?;
                out.write_char(')')
            }
            many => {
                out.write_str("MULTIPOLYGON ")?;
                write_parts(out, many)
            }
        },
    }
}

fn write_coord<W: Write>(out: &mut W, p: &Vector2) -> fmt::Result {
    write!(out, "{:.6} {:.6}", p.x, p.y)
}

/// `(x y, x y, ...)`
fn write_sequence<W: Write>(out: &mut W, points: &[Vector2]) -> fmt::Result {
    out.write_char('(')?;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_coord(out, p)?;
    }
    out.write_char(')')
}

/// `((x y, ...), (x y, ...))`
fn write_parts<W: Write>(out: &mut W, parts: &[Vec<Vector2>]) -> fmt::Result {
    out.write_char('(')?;
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_sequence(out, part)?;
    }
    out.write_char(')')
}

fn estimate_len(geometry: &Geometry) -> usize {
    // "0.000000 0.000000, " plus keyword slack
    geometry.num_points() * 20 + 24
}
