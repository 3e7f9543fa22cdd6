//! The fixed 100-byte main file header.
//!
//! ```text
//! offset  size  order   field
//!      0     4  big     file code (9994)
//!      4    20  big     unused
//!     24     4  big     file length, in 16-bit words
//!     28     4  little  version (1000)
//!     32     4  little  shape type
//!     36    32  little  xmin, ymin, xmax, ymax
//!     68    32  little  zmin, zmax, mmin, mmax (not read)
//! ```

use super::byte_reader::ByteReader;
use crate::error::Result;
use crate::shape_type::ShapeType;
use crate::types::BoundingBox2D;

/// Size of the main file header in bytes.
pub const HEADER_LENGTH: u64 = 100;

/// Expected value of the file code field.
pub const FILE_CODE: i32 = 9994;

/// Expected value of the version field.
pub const FILE_VERSION: i32 = 1000;

/// Decoded main file header. Read once per file.
#[derive(Debug, Clone, PartialEq)]
pub struct ShpHeader {
    pub file_code: i32,
    /// Total file length in 16-bit words, header included.
    pub file_length: u32,
    pub version: i32,
    pub shape_type: ShapeType,
    pub bounding_box: BoundingBox2D,
}

impl ShpHeader {
    /// Decode the header from the start of the source and leave the cursor
    /// at offset 100.
    pub fn read<T: AsRef<[u8]>>(reader: &mut ByteReader<T>) -> Result<Self> {
        reader.seek(0)?;
        reader.ensure(HEADER_LENGTH)?;

        let file_code = reader.read_i32_be()?;

        reader.seek(24)?;
        let file_length = reader.read_u32_be()?;
        let version = reader.read_i32_le()?;
        let shape_type = ShapeType::from_code(reader.read_i32_le()?);
        let bounding_box = read_bounding_box(reader)?;

        reader.seek(HEADER_LENGTH)?;

        log::debug!(
            "shp header: type={} length={} words bbox={}",
            shape_type,
            file_length,
            bounding_box
        );

        Ok(Self {
            file_code,
            file_length,
            version,
            shape_type,
            bounding_box,
        })
    }

    /// Declared file length in bytes.
    pub fn file_length_bytes(&self) -> u64 {
        u64::from(self.file_length) * 2
    }
}

/// Read xmin, ymin, xmax, ymax as four little-endian doubles.
pub(crate) fn read_bounding_box<T: AsRef<[u8]>>(
    reader: &mut ByteReader<T>,
) -> Result<BoundingBox2D> {
    let xmin = reader.read_f64_le()?;
    let ymin = reader.read_f64_le()?;
    let xmax = reader.read_f64_le()?;
    let ymax = reader.read_f64_le()?;
    Ok(BoundingBox2D::from_extents(xmin, ymin, xmax, ymax))
}
