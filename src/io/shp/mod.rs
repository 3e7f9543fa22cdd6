//! ESRI Shapefile (`.shp`) main file decoding
//!
//! A `.shp` file is a 100-byte header followed by variable-length records.
//! [`ShpReader`] drives a session: it decodes the header once, then walks
//! the records in file order with a single [`ByteReader`] cursor.

mod byte_reader;
mod geometry_reader;
mod header;
mod reader;
mod record;

pub use byte_reader::ByteReader;
pub use geometry_reader::{part_boundaries, read_geometry, split_parts};
pub use header::{ShpHeader, FILE_CODE, FILE_VERSION, HEADER_LENGTH};
pub use reader::{ShpReader, ShpReaderConfiguration};
pub use record::{
    read_record_body, DecodedRecord, RecordHeader, RECORD_HEADER_LENGTH, SHAPE_TYPE_LENGTH,
};
