use crate::error::{OperationError, Result};
use crate::geometry::Transformable;
use crate::math::{Matrix4, Vector3, TOLERANCE};

/// Scales a solid independently along each axis, about the origin.
pub struct Scale<'a, T> {
    target: &'a T,
    factors: Vector3,
}

impl<'a, T: Transformable> Scale<'a, T> {
    /// Creates a new `Scale` operation.
    #[must_use]
    pub fn new(target: &'a T, factors: Vector3) -> Self {
        Self { target, factors }
    }

    /// Executes the scaling, returning the scaled copy.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if any factor is not positive.
    pub fn execute(&self) -> Result<T> {
        let f = self.factors;
        if f.x <= TOLERANCE || f.y <= TOLERANCE || f.z <= TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "scale factors must be positive, got ({}, {}, {})",
                f.x, f.y, f.z
            ))
            .into());
        }
        Ok(self
            .target
            .transformed(&Matrix4::new_nonuniform_scaling(&self.factors)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Point3;
    use crate::operations::boolean::{classify_point_in_solid, PointClassification};
    use crate::operations::creation::MakeBox;
    use crate::operations::query::BoundingBox;

    #[test]
    fn z_scale_doubles_height() {
        let solid = MakeBox::new(Vector3::new(1.0, 1.0, 1.5)).execute().unwrap();
        let tall = Scale::new(&solid, Vector3::new(1.0, 1.0, 2.0)).execute().unwrap();
        let aabb = BoundingBox::new(&tall).execute().unwrap();
        assert_relative_eq!(aabb.size(), Vector3::new(2.0, 2.0, 6.0));
        assert_eq!(
            classify_point_in_solid(&Point3::new(0.0, 0.0, 2.5), &tall),
            PointClassification::Inside
        );
    }

    #[test]
    fn zero_factor_rejected() {
        let solid = MakeBox::new(Vector3::new(1.0, 1.0, 1.0)).execute().unwrap();
        assert!(Scale::new(&solid, Vector3::new(1.0, 0.0, 1.0)).execute().is_err());
    }
}
