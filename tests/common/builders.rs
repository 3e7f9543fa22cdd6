//! Byte-level builders for synthetic `.shp` files.

#![allow(dead_code)]

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

/// A coordinate pair as written to disk.
pub type Xy = (f64, f64);

/// Builds a complete shapefile image: header first, then records with
/// sequential record numbers starting at 1.
pub struct ShpFileBuilder {
    shape_type: i32,
    bbox: [f64; 4],
    records: Vec<u8>,
    next_number: i32,
}

impl ShpFileBuilder {
    pub fn new(shape_type: i32) -> Self {
        Self {
            shape_type,
            bbox: [0.0; 4],
            records: Vec::new(),
            next_number: 1,
        }
    }

    pub fn bounding_box(mut self, xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        self.bbox = [xmin, ymin, xmax, ymax];
        self
    }

    /// Append a record whose content is the shape type plus `body`.
    pub fn record(mut self, shape_type: i32, body: &[u8]) -> Self {
        let content_words = ((4 + body.len()) / 2) as i32;
        self.records.write_i32::<BigEndian>(self.next_number).unwrap();
        self.records.write_i32::<BigEndian>(content_words).unwrap();
        self.records.write_i32::<LittleEndian>(shape_type).unwrap();
        self.records.extend_from_slice(body);
        self.next_number += 1;
        self
    }

    pub fn null(self) -> Self {
        self.record(0, &[])
    }

    pub fn point(self, x: f64, y: f64) -> Self {
        let mut body = Vec::new();
        write_xy(&mut body, (x, y));
        self.record(1, &body)
    }

    pub fn multi_point(self, points: &[Xy]) -> Self {
        let mut body = envelope(points);
        body.write_i32::<LittleEndian>(points.len() as i32).unwrap();
        for p in points {
            write_xy(&mut body, *p);
        }
        self.record(8, &body)
    }

    pub fn poly_line(self, parts: &[Vec<Xy>]) -> Self {
        self.record(3, &multi_part_body(parts))
    }

    pub fn polygon(self, rings: &[Vec<Xy>]) -> Self {
        self.record(5, &multi_part_body(rings))
    }

    pub fn build(self) -> Vec<u8> {
        let total = 100 + self.records.len();
        let mut out = Vec::with_capacity(total);
        out.write_i32::<BigEndian>(9994).unwrap();
        out.extend_from_slice(&[0u8; 20]);
        out.write_i32::<BigEndian>((total / 2) as i32).unwrap();
        out.write_i32::<LittleEndian>(1000).unwrap();
        out.write_i32::<LittleEndian>(self.shape_type).unwrap();
        for v in self.bbox {
            out.write_f64::<LittleEndian>(v).unwrap();
        }
        out.extend_from_slice(&[0u8; 32]);
        out.extend_from_slice(&self.records);
        out
    }
}

/// Body shared by PolyLine and Polygon records.
pub fn multi_part_body(parts: &[Vec<Xy>]) -> Vec<u8> {
    let mut starts = Vec::with_capacity(parts.len());
    let mut start = 0i32;
    for part in parts {
        starts.push(start);
        start += part.len() as i32;
    }
    let points: Vec<Xy> = parts.iter().flatten().copied().collect();
    raw_multi_part_body(&starts, points.len() as i32, &points)
}

/// PolyLine/Polygon body with the part starts and point count written as
/// given, for layouts the reader must reject.
pub fn raw_multi_part_body(starts: &[i32], num_points: i32, points: &[Xy]) -> Vec<u8> {
    let mut body = envelope(points);
    body.write_i32::<LittleEndian>(starts.len() as i32).unwrap();
    body.write_i32::<LittleEndian>(num_points).unwrap();
    for s in starts {
        body.write_i32::<LittleEndian>(*s).unwrap();
    }
    for p in points {
        write_xy(&mut body, *p);
    }
    body
}

fn envelope(points: &[Xy]) -> Vec<u8> {
    let mut bbox = [0.0f64; 4];
    if let Some(&(x, y)) = points.first() {
        bbox = [x, y, x, y];
        for &(x, y) in points {
            bbox[0] = bbox[0].min(x);
            bbox[1] = bbox[1].min(y);
            bbox[2] = bbox[2].max(x);
            bbox[3] = bbox[3].max(y);
        }
    }
    let mut out = Vec::with_capacity(32);
    for v in bbox {
        out.write_f64::<LittleEndian>(v).unwrap();
    }
    out
}

fn write_xy(out: &mut Vec<u8>, (x, y): Xy) {
    out.write_f64::<LittleEndian>(x).unwrap();
    out.write_f64::<LittleEndian>(y).unwrap();
}
