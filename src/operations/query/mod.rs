mod area;
mod bounding_box;
mod length;

pub use area::FaceArea;
pub use bounding_box::{Aabb, BoundingBox};
pub use length::WireLength;
