mod bounding_box;

pub use bounding_box::{bounds_center, Aabb, BoundingBox};
