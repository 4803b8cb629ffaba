use crate::geometry::Transformable;
use crate::math::{Matrix4, Vector3};

/// Translates a solid (or anything else [`Transformable`]) by a displacement vector.
pub struct Translate<'a, T> {
    target: &'a T,
    displacement: Vector3,
}

impl<'a, T: Transformable> Translate<'a, T> {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(target: &'a T, displacement: Vector3) -> Self {
        Self {
            target,
            displacement,
        }
    }

    /// Executes the translation, returning the moved copy.
    #[must_use]
    pub fn execute(&self) -> T {
        self.target
            .transformed(&Matrix4::new_translation(&self.displacement))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::Connector;
    use crate::math::Point3;
    use crate::operations::creation::MakeBox;
    use crate::operations::query::bounds_center;

    #[test]
    fn translation_shifts_bounds() {
        let solid = MakeBox::new(Vector3::new(1.0, 1.0, 1.0)).execute().unwrap();
        let moved = Translate::new(&solid, Vector3::new(5.0, 3.0, 2.0)).execute();
        assert_relative_eq!(bounds_center(&moved).unwrap(), Point3::new(5.0, 3.0, 2.0));
    }

    #[test]
    fn translation_keeps_connector_axes() {
        let c = Connector::upright(Point3::origin());
        let moved = Translate::new(&c, Vector3::new(0.0, 0.0, 4.0)).execute();
        assert_relative_eq!(*moved.origin(), Point3::new(0.0, 0.0, 4.0));
        assert_relative_eq!(*moved.axis(), *c.axis());
    }
}
