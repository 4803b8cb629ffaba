use crate::error::{OperationError, Result};
use crate::geometry::{Outline, Prism, Solid};
use crate::math::{Matrix4, TOLERANCE};

/// Extrudes a planar outline along +Z to create a solid.
///
/// The outline sits on the XY plane and the solid spans `z = 0` to
/// `z = height`.
pub struct Extrude<'a> {
    outline: &'a Outline,
    height: f64,
}

impl<'a> Extrude<'a> {
    /// Creates a new `Extrude` operation.
    #[must_use]
    pub fn new(outline: &'a Outline, height: f64) -> Self {
        Self { outline, height }
    }

    /// Executes the extrusion.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the height is not positive.
    pub fn execute(&self) -> Result<Solid> {
        if self.height <= TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "extrude height must be positive, got {}",
                self.height
            ))
            .into());
        }
        Ok(Solid::prism(Prism::new(
            self.outline.vertices().to_vec(),
            self.height,
            Matrix4::identity(),
        )))
    }
}
