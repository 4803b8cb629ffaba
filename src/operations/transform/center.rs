use crate::error::Result;
use crate::geometry::{Part, Transformable};
use crate::math::Matrix4;
use crate::operations::query::bounds_center;

/// Moves a part so the center of its solid's bounding box sits at the origin.
///
/// Connectors move along with the solid.
pub struct Center<'a> {
    part: &'a Part,
}

impl<'a> Center<'a> {
    /// Creates a new `Center` operation.
    #[must_use]
    pub fn new(part: &'a Part) -> Self {
        Self { part }
    }

    /// Executes the centering, returning the moved copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the part's solid is empty.
    pub fn execute(&self) -> Result<Part> {
        let center = bounds_center(self.part.solid())?;
        Ok(self
            .part
            .transformed(&Matrix4::new_translation(&(-center.coords))))
    }
}
