//! # shprust
//!
//! A pure Rust library for decoding ESRI Shapefile (`.shp`) geometry into
//! WKT text.
//!
//! ## Features
//!
//! - Decodes the 100-byte main header and every record in file order
//! - Point, MultiPoint, PolyLine, Polygon and Null records
//! - Z, M and MultiPatch records are recognized and skipped without losing
//!   alignment with the records that follow
//! - Deterministic WKT output with six fractional digits
//! - Strict or failsafe handling of truncated and malformed records
//! - Optional parallel decoding of record bodies
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shprust::ShpReader;
//!
//! let dataset = ShpReader::from_file("parcels.shp")?.read()?;
//!
//! println!("{} records, type {}", dataset.len(), dataset.header().shape_type);
//! for wkt in dataset.wkt_strings() {
//!     println!("{}", wkt);
//! }
//! # Ok::<(), shprust::ShpError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`ByteReader`](io::shp::ByteReader) - cursor with explicit byte order
//! - [`ShpHeader`] - main file header
//! - [`RecordHeader`] / [`DecodedRecord`] - one record and its geometry
//! - [`Geometry`] - closed set of decoded geometry kinds
//! - [`wkt`] - text rendering
//! - [`Dataset`] - everything one decoding pass produced

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod dataset;
pub mod error;
pub mod geometry;
pub mod io;
pub mod notification;
pub mod shape_type;
pub mod types;
pub mod wkt;

// Re-export commonly used types
pub use dataset::Dataset;
pub use error::{Result, ShpError};
pub use geometry::Geometry;
pub use shape_type::ShapeType;
pub use types::{BoundingBox2D, Vector2};

// Re-export I/O types
pub use io::shp::{DecodedRecord, RecordHeader, ShpHeader};
pub use io::{ShpReader, ShpReaderConfiguration};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
