//! Basic geometric types shared by the decoder and serializer

mod bounds;
mod vector;

pub use bounds::BoundingBox2D;
pub use vector::Vector2;
