use crate::error::{OperationError, Result};
use crate::geometry::{Prism, Solid};
use crate::math::{Matrix4, Point2, Vector3, TOLERANCE};

/// Creates a box solid centered on the origin from its half-extents.
pub struct MakeBox {
    half_extents: Vector3,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(half_extents: Vector3) -> Self {
        Self { half_extents }
    }

    /// Executes the operation, creating the box.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if any half-extent is not positive.
    pub fn execute(&self) -> Result<Solid> {
        let h = self.half_extents;
        if h.x <= TOLERANCE || h.y <= TOLERANCE || h.z <= TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "box half-extents must be positive, got ({}, {}, {})",
                h.x, h.y, h.z
            ))
            .into());
        }

        let profile = vec![
            Point2::new(-h.x, -h.y),
            Point2::new(h.x, -h.y),
            Point2::new(h.x, h.y),
            Point2::new(-h.x, h.y),
        ];
        let placement = Matrix4::new_translation(&Vector3::new(0.0, 0.0, -h.z));
        Ok(Solid::prism(Prism::new(profile, 2.0 * h.z, placement)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn box_is_single_prism() {
        let solid = MakeBox::new(Vector3::new(1.0, 1.0, 1.0)).execute().unwrap();
        assert_eq!(solid.prism_count(), 1);
    }

    #[test]
    fn flat_box_rejected() {
        assert!(MakeBox::new(Vector3::new(1.0, 0.0, 1.0)).execute().is_err());
        assert!(MakeBox::new(Vector3::new(-1.0, 1.0, 1.0)).execute().is_err());
    }
}
