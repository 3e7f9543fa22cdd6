//! Per-shape-type body decoders.
//!
//! Each decoder starts right after the record's shape type field and is
//! given the number of body bytes the record declares. Counts read from the
//! body are checked against that length before anything is allocated, so a
//! corrupt count surfaces as [`ShpError::MalformedGeometry`] instead of a
//! huge allocation or an out-of-range slice.

use super::byte_reader::ByteReader;
use super::header::read_bounding_box;
use crate::error::{Result, ShpError};
use crate::geometry::Geometry;
use crate::shape_type::ShapeType;
use crate::types::{BoundingBox2D, Vector2};

const BBOX_SIZE: u64 = 32;
const POINT_SIZE: u64 = 16;
const COUNT_SIZE: u64 = 4;

/// Decode the body of a record of a supported shape type.
///
/// Returns `Ok(None)` for shape types without a decoder; the caller is
/// responsible for moving past the body in that case.
pub fn read_geometry<T: AsRef<[u8]>>(
    reader: &mut ByteReader<T>,
    shape_type: ShapeType,
    body_len: u64,
) -> Result<Option<Geometry>> {
    let geometry = match shape_type {
        ShapeType::Null => Geometry::Null,
        ShapeType::Point => Geometry::Point(read_point(reader, body_len)?),
        ShapeType::MultiPoint => read_multi_point(reader, body_len)?,
        ShapeType::PolyLine => {
            let (bbox, parts) = read_parts(reader, body_len)?;
            Geometry::PolyLine { bbox, parts }
        }
        ShapeType::Polygon => {
            let (bbox, rings) = read_parts(reader, body_len)?;
            Geometry::Polygon { bbox, rings }
        }
        _ => return Ok(None),
    };
    Ok(Some(geometry))
}

fn read_coordinate<T: AsRef<[u8]>>(reader: &mut ByteReader<T>) -> Result<Vector2> {
    let x = reader.read_f64_le()?;
    let y = reader.read_f64_le()?;
    Ok(Vector2::new(x, y))
}

fn read_point<T: AsRef<[u8]>>(reader: &mut ByteReader<T>, body_len: u64) -> Result<Vector2> {
    check_fits("Point", POINT_SIZE, body_len)?;
    read_coordinate(reader)
}

fn read_multi_point<T: AsRef<[u8]>>(
    reader: &mut ByteReader<T>,
    body_len: u64,
) -> Result<Geometry> {
    check_fits("MultiPoint", BBOX_SIZE + COUNT_SIZE, body_len)?;
    let bbox = read_bounding_box(reader)?;
    let num_points = read_count(reader, "numPoints")?;
    check_fits(
        "MultiPoint",
        BBOX_SIZE + COUNT_SIZE + num_points as u64 * POINT_SIZE,
        body_len,
    )?;

    let points = (0..num_points)
        .map(|_| read_coordinate(reader))
        .collect::<Result<Vec<_>>>()?;
    Ok(Geometry::MultiPoint { bbox, points })
}

/// Shared PolyLine/Polygon layout: bbox, numParts, numPoints, part starts,
/// then the flat point array.
fn read_parts<T: AsRef<[u8]>>(
    reader: &mut ByteReader<T>,
    body_len: u64,
) -> Result<(BoundingBox2D, Vec<Vec<Vector2>>)> {
    let fixed = BBOX_SIZE + 2 * COUNT_SIZE;
    check_fits("PolyLine/Polygon", fixed, body_len)?;

    let bbox = read_bounding_box(reader)?;
    let num_parts = read_count(reader, "numParts")?;
    let num_points = read_count(reader, "numPoints")?;
    check_fits(
        "PolyLine/Polygon",
        fixed + num_parts as u64 * COUNT_SIZE + num_points as u64 * POINT_SIZE,
        body_len,
    )?;

    let starts = (0..num_parts)
        .map(|_| reader.read_i32_le())
        .collect::<Result<Vec<_>>>()?;
    let boundaries = part_boundaries(&starts, num_points)?;

    let points = (0..num_points)
        .map(|_| read_coordinate(reader))
        .collect::<Result<Vec<_>>>()?;

    Ok((bbox, split_parts(&points, &boundaries)))
}

/// Validate part start indices and append the final boundary.
///
/// The result has `starts.len() + 1` entries, begins at 0, strictly
/// increases and ends at `num_points`, so part `i` is
/// `boundaries[i]..boundaries[i + 1]` and holds at least one point.
pub fn part_boundaries(starts: &[i32], num_points: usize) -> Result<Vec<usize>> {
    if starts.is_empty() {
        if num_points != 0 {
            return Err(ShpError::MalformedGeometry(format!(
                "no parts declared for {} points",
                num_points
            )));
        }
        return Ok(vec![0]);
    }

    let mut boundaries = Vec::with_capacity(starts.len() + 1);
    for (i, &start) in starts.iter().enumerate() {
        let start = usize::try_from(start).map_err(|_| {
            ShpError::MalformedGeometry(format!("part {} starts at negative index {}", i, start))
        })?;
        match boundaries.last() {
            None if start != 0 => {
                return Err(ShpError::MalformedGeometry(format!(
                    "first part starts at {} instead of 0",
                    start
                )));
            }
            Some(&previous) if start < previous => {
                return Err(ShpError::MalformedGeometry(format!(
                    "part {} starts at {} before previous part start {}",
                    i, start, previous
                )));
            }
            Some(&previous) if start == previous => {
                return Err(ShpError::MalformedGeometry(format!(
                    "part {} has no points",
                    i - 1
                )));
            }
            _ => {}
        }
        if start > num_points {
            return Err(ShpError::MalformedGeometry(format!(
                "part {} starts at {} past point count {}",
                i, start, num_points
            )));
        }
        boundaries.push(start);
    }
    if boundaries.last() == Some(&num_points) {
        return Err(ShpError::MalformedGeometry(format!(
            "part {} has no points",
            starts.len() - 1
        )));
    }
    boundaries.push(num_points);
    Ok(boundaries)
}

/// Slice the flat point array at the given boundaries.
pub fn split_parts(points: &[Vector2], boundaries: &[usize]) -> Vec<Vec<Vector2>> {
    boundaries
        .windows(2)
        .map(|w| points[w[0]..w[1]].to_vec())
        .collect()
}

fn read_count<T: AsRef<[u8]>>(reader: &mut ByteReader<T>, field: &str) -> Result<usize> {
    let value = reader.read_i32_le()?;
    usize::try_from(value)
        .map_err(|_| ShpError::MalformedGeometry(format!("negative {}: {}", field, value)))
}

fn check_fits(kind: &str, needed: u64, body_len: u64) -> Result<()> {
    if needed > body_len {
        return Err(ShpError::MalformedGeometry(format!(
            "{} needs {} body bytes, record declares {}",
            kind, needed, body_len
        )));
    }
    Ok(())
}
