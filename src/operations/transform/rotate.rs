use nalgebra::Unit;

use crate::error::{OperationError, Result};
use crate::geometry::Transformable;
use crate::math::{Isometry3, Point3, UnitQuaternion, Vector3, TOLERANCE};

/// Rotates a solid around an axis.
pub struct Rotate<'a, T> {
    target: &'a T,
    axis_origin: Point3,
    axis_direction: Vector3,
    angle: f64,
}

impl<'a, T: Transformable> Rotate<'a, T> {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angle` - Rotation angle in radians.
    #[must_use]
    pub fn new(target: &'a T, axis_origin: Point3, axis_direction: Vector3, angle: f64) -> Self {
        Self {
            target,
            axis_origin,
            axis_direction,
            angle,
        }
    }

    /// Executes the rotation, returning the rotated copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis direction is zero-length.
    pub fn execute(&self) -> Result<T> {
        let len = self.axis_direction.norm();
        if len < TOLERANCE {
            return Err(
                OperationError::InvalidInput("rotation axis must be non-zero".into()).into(),
            );
        }
        let axis = Unit::new_unchecked(self.axis_direction / len);
        let rotation = Isometry3::rotation_wrt_point(
            UnitQuaternion::from_axis_angle(&axis, self.angle),
            self.axis_origin,
        );
        Ok(self.target.transformed(&rotation.to_homogeneous()))
    }
}
