mod classify;
mod subtract;
mod union;

pub use classify::{classify_point_in_solid, PointClassification};
pub use subtract::Subtract;
pub use union::{Union, UnionAll};
