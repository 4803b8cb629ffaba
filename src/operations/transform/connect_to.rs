use crate::error::Result;
use crate::geometry::{compose, Connector, Transformable};

/// Moves a value so that `source` (expressed in the value's own frame)
/// coincides with `target`.
pub struct ConnectTo<'a, T> {
    target_value: &'a T,
    source: Connector,
    target: Connector,
    rotation: f64,
}

impl<'a, T: Transformable> ConnectTo<'a, T> {
    /// Creates a new `ConnectTo` operation.
    #[must_use]
    pub fn new(value: &'a T, source: Connector, target: Connector) -> Self {
        Self {
            target_value: value,
            source,
            target,
            rotation: 0.0,
        }
    }

    /// Adds a rotation (radians) about the target axis after alignment.
    #[must_use]
    pub fn rotated(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Executes the connection, returning the moved copy.
    ///
    /// # Errors
    ///
    /// Returns an error if either connector is degenerate.
    pub fn execute(&self) -> Result<T> {
        let transform = compose(&self.source, &self.target, self.rotation)?;
        Ok(self.target_value.transformed(&transform.to_homogeneous()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::{Part, CENTER};
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::MakeBox;
    use crate::operations::query::{bounds_center, BoundingBox};

    fn part() -> Part {
        let solid = MakeBox::new(Vector3::new(3.0, 1.0, 1.0)).execute().unwrap();
        Part::new(solid).with_connector(CENTER, Connector::upright(Point3::origin()))
    }

    #[test]
    fn connecting_identity_leaves_part_unchanged() {
        let p = part();
        let c = *p.connector(CENTER).unwrap();
        let moved = ConnectTo::new(&p, c, c).execute().unwrap();
        assert_relative_eq!(
            bounds_center(moved.solid()).unwrap(),
            Point3::origin(),
            epsilon = 1e-12
        );
        let aabb = BoundingBox::new(moved.solid()).execute().unwrap();
        assert_relative_eq!(aabb.size(), Vector3::new(6.0, 2.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn connect_moves_source_onto_target() {
        let p = part();
        let source = Connector::upright(Point3::new(3.0, 1.0, 0.0));
        let target = Connector::upright(Point3::new(10.0, 10.0, 0.0));
        let moved = ConnectTo::new(&p, source, target).execute().unwrap();
        assert_relative_eq!(
            bounds_center(moved.solid()).unwrap(),
            Point3::new(7.0, 9.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn rotated_connection_turns_part() {
        let p = part();
        let c = Connector::upright(Point3::origin());
        let moved = ConnectTo::new(&p, c, c).rotated(FRAC_PI_2).execute().unwrap();
        let aabb = BoundingBox::new(moved.solid()).execute().unwrap();
        assert_relative_eq!(aabb.size(), Vector3::new(2.0, 6.0, 2.0), epsilon = 1e-12);
        assert_relative_eq!(
            *moved.connector(CENTER).unwrap().orientation(),
            -Vector3::x(),
            epsilon = 1e-12
        );
    }
}
