use crate::error::{OperationError, Result};
use crate::geometry::{Connector, Part, CENTER};
use crate::math::{Point3, Vector3};
use crate::operations::boolean::{Subtract, UnionAll};
use crate::operations::transform::Translate;

use super::MakeBox;

/// Dimensions of a plate-mount switch cutout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchHoleParams {
    /// Side length of the square hole.
    pub hole_size: f64,
    /// Width of each side notch (along Y).
    pub notch_width: f64,
    /// Depth of each side notch (along X).
    pub notch_depth: f64,
    /// Plate thickness, i.e. the height of the cutout.
    pub thickness: f64,
}

impl Default for SwitchHoleParams {
    fn default() -> Self {
        Self {
            hole_size: 13.97,
            notch_width: 3.5001,
            notch_depth: 0.8128,
            thickness: 3.0,
        }
    }
}

/// Creates the filled solid of one switch hole.
///
/// The hole is a square centered on the origin, through the full plate
/// thickness, with a notch left standing on its left and right walls. It
/// exposes a [`CENTER`] connector at the origin (axis +Z, orientation +Y).
pub struct MakeSwitchHole {
    params: SwitchHoleParams,
}

impl MakeSwitchHole {
    /// Creates a new `MakeSwitchHole` operation.
    #[must_use]
    pub fn new(params: SwitchHoleParams) -> Self {
        Self { params }
    }

    /// Executes the operation, creating the hole.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if a dimension is not positive
    /// or the notches are deeper than half the hole.
    pub fn execute(&self) -> Result<Part> {
        let p = &self.params;
        let hole_radius = p.hole_size / 2.0;
        let plate_radius = p.thickness / 2.0;
        if p.notch_depth >= hole_radius {
            return Err(OperationError::InvalidInput(format!(
                "notch depth {} does not fit in a {} hole",
                p.notch_depth, p.hole_size
            ))
            .into());
        }

        let square = MakeBox::new(Vector3::new(hole_radius, hole_radius, plate_radius)).execute()?;
        let notch = MakeBox::new(Vector3::new(
            p.notch_depth / 2.0,
            p.notch_width / 2.0,
            plate_radius,
        ))
        .execute()?;

        let notch_offset = hole_radius - p.notch_depth / 2.0;
        let right = Translate::new(&notch, Vector3::new(notch_offset, 0.0, 0.0)).execute();
        let left = Translate::new(&notch, Vector3::new(-notch_offset, 0.0, 0.0)).execute();
        let notches = UnionAll::new([&right, &left]).execute();
        let hole = Subtract::new(&square, &notches).execute();

        Ok(Part::new(hole).with_connector(CENTER, Connector::upright(Point3::origin())))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::operations::boolean::{classify_point_in_solid, PointClassification};
    use crate::operations::query::BoundingBox;

    #[test]
    fn hole_spans_plate_thickness() {
        let hole = MakeSwitchHole::new(SwitchHoleParams::default()).execute().unwrap();
        let aabb = BoundingBox::new(hole.solid()).execute().unwrap();
        assert_relative_eq!(aabb.size(), Vector3::new(13.97, 13.97, 3.0), epsilon = 1e-12);
        assert_relative_eq!(aabb.center(), Point3::origin(), epsilon = 1e-12);
    }

    #[test]
    fn notches_are_left_standing() {
        let hole = MakeSwitchHole::new(SwitchHoleParams::default()).execute().unwrap();
        let edge = 13.97 / 2.0 - 0.2;
        assert_eq!(
            classify_point_in_solid(&Point3::new(edge, 0.0, 0.0), hole.solid()),
            PointClassification::Outside
        );
        assert_eq!(
            classify_point_in_solid(&Point3::new(-edge, 0.0, 0.0), hole.solid()),
            PointClassification::Outside
        );
        assert_eq!(
            classify_point_in_solid(&Point3::new(edge, 4.0, 0.0), hole.solid()),
            PointClassification::Inside
        );
    }

    #[test]
    fn exposes_center_connector() {
        let hole = MakeSwitchHole::new(SwitchHoleParams::default()).execute().unwrap();
        assert_eq!(
            *hole.connector(CENTER).unwrap(),
            Connector::upright(Point3::origin())
        );
    }

    #[test]
    fn oversized_notch_rejected() {
        let params = SwitchHoleParams {
            notch_depth: 8.0,
            ..SwitchHoleParams::default()
        };
        assert!(MakeSwitchHole::new(params).execute().is_err());
    }
}
