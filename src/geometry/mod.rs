pub mod connector;
pub mod outline;
pub mod part;
pub mod solid;

pub use connector::{compose, Connector, Connectors, CENTER};
pub use outline::{Bounds2, Outline, Side};
pub use part::Part;
pub use solid::{Prism, Solid, SolidNode};

use crate::math::Matrix4;

/// Values that can be moved by a homogeneous 4x4 transform.
///
/// Implementations return a new value; nothing is transformed in place.
pub trait Transformable: Sized {
    /// Returns a copy of `self` with `matrix` applied.
    #[must_use]
    fn transformed(&self, matrix: &Matrix4) -> Self;
}
