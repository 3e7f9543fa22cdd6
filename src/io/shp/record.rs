//! Record headers and decoded records.
//!
//! Every record starts with an 8-byte big-endian header (record number,
//! content length in 16-bit words) followed by the little-endian shape type.
//! The content length covers the shape type and the body, so the whole
//! record spans `8 + content_length * 2` bytes whatever its type.

use super::byte_reader::ByteReader;
use super::geometry_reader::read_geometry;
use crate::error::{Result, ShpError};
use crate::geometry::Geometry;
use crate::shape_type::ShapeType;
use crate::types::BoundingBox2D;
use crate::wkt::to_wkt;

/// Size of the big-endian record number and content length fields.
pub const RECORD_HEADER_LENGTH: u64 = 8;

/// Size of the shape type field that opens every record's content.
pub const SHAPE_TYPE_LENGTH: u64 = 4;

/// The fixed fields at the start of each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    pub record_number: i32,
    /// Content length in 16-bit words, shape type field included.
    pub content_length: u32,
    pub shape_type: ShapeType,
}

impl RecordHeader {
    /// Read the 12 bytes of record number, content length and shape type.
    pub fn read<T: AsRef<[u8]>>(reader: &mut ByteReader<T>) -> Result<Self> {
        reader.ensure(RECORD_HEADER_LENGTH + SHAPE_TYPE_LENGTH)?;
        let record_number = reader.read_i32_be()?;
        let content_length = reader.read_u32_be()?;
        let shape_type = ShapeType::from_code(reader.read_i32_le()?);
        Ok(Self {
            record_number,
            content_length,
            shape_type,
        })
    }

    /// Content length in bytes.
    pub fn byte_length(&self) -> u64 {
        u64::from(self.content_length) * 2
    }

    /// Bytes from the start of the record to the start of the next one.
    pub fn span(&self) -> u64 {
        RECORD_HEADER_LENGTH + self.byte_length()
    }

    /// Bytes of shape-specific body after the shape type field.
    pub fn body_length(&self) -> Result<u64> {
        self.byte_length()
            .checked_sub(SHAPE_TYPE_LENGTH)
            .ok_or_else(|| {
                ShpError::MalformedGeometry(format!(
                    "record {} content length {} words cannot hold its shape type",
                    self.record_number, self.content_length
                ))
            })
    }
}

/// One record after decoding.
///
/// `geometry` is `None` when the shape type has no decoder; the record is
/// still reported so callers can see what was skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedRecord {
    pub header: RecordHeader,
    pub geometry: Option<Geometry>,
    pub wkt: Option<String>,
}

impl DecodedRecord {
    /// Pair a header with its geometry and render the text form.
    pub fn new(header: RecordHeader, geometry: Option<Geometry>) -> Self {
        let wkt = geometry.as_ref().map(to_wkt);
        Self {
            header,
            geometry,
            wkt,
        }
    }

    pub fn record_number(&self) -> i32 {
        self.header.record_number
    }

    pub fn shape_type(&self) -> ShapeType {
        self.header.shape_type
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn wkt(&self) -> Option<&str> {
        self.wkt.as_deref()
    }

    pub fn bounding_box(&self) -> Option<BoundingBox2D> {
        self.geometry.as_ref().and_then(Geometry::bounding_box)
    }

    pub fn num_parts(&self) -> usize {
        self.geometry.as_ref().map_or(0, Geometry::num_parts)
    }

    pub fn num_points(&self) -> usize {
        self.geometry.as_ref().map_or(0, Geometry::num_points)
    }

    /// Whether a geometry was decoded.
    pub fn is_supported(&self) -> bool {
        self.geometry.is_some()
    }

    pub fn is_null(&self) -> bool {
        matches!(self.geometry, Some(Geometry::Null))
    }
}

/// Decode the body of a record whose header has just been read.
///
/// The cursor is left wherever the decoder stopped; the caller moves it to
/// the record's declared end.
pub fn read_record_body<T: AsRef<[u8]>>(
    reader: &mut ByteReader<T>,
    header: RecordHeader,
) -> Result<DecodedRecord> {
    let body_len = header.body_length()?;
    let body_start = reader.position();
    let geometry = read_geometry(reader, header.shape_type, body_len)?;

    let consumed = reader.position() - body_start;
    if consumed > body_len {
        return Err(ShpError::MalformedGeometry(format!(
            "record {} read {} body bytes past its declared {}",
            header.record_number, consumed, body_len
        )));
    }

    Ok(DecodedRecord::new(header, geometry))
}
