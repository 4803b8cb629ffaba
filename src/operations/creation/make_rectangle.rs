use crate::error::{OperationError, Result};
use crate::geometry::Outline;
use crate::math::{Point2, TOLERANCE};

/// Creates an axis-aligned square outline from its center and half-width.
pub struct MakeRectangle {
    center: Point2,
    radius: f64,
}

impl MakeRectangle {
    /// Creates a new `MakeRectangle` operation.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Executes the operation, creating the outline.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the half-width is not positive.
    pub fn execute(&self) -> Result<Outline> {
        if self.radius <= TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "rectangle half-width must be positive, got {}",
                self.radius
            ))
            .into());
        }
        let (cx, cy, r) = (self.center.x, self.center.y, self.radius);
        Outline::new(vec![
            Point2::new(cx - r, cy - r),
            Point2::new(cx + r, cy - r),
            Point2::new(cx + r, cy + r),
            Point2::new(cx - r, cy + r),
        ])
    }
}
