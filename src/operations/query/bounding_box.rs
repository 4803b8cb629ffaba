use crate::error::{OperationError, Result};
use crate::geometry::{Solid, SolidNode};
use crate::math::{Point3, Vector3};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    fn around(point: Point3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    fn include(&mut self, point: &Point3) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }

    fn merge(&mut self, other: &Aabb) {
        self.include(&other.min);
        self.include(&other.max);
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Edge lengths along each axis.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }
}

/// Computes the axis-aligned bounding box of a solid.
///
/// Prism leaves are bounded exactly by their transformed corners. A
/// difference is bounded by its first operand, which may overestimate the
/// extent when the subtrahend removes an outer slab.
pub struct BoundingBox<'a> {
    solid: &'a Solid,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the solid is empty.
    pub fn execute(&self) -> Result<Aabb> {
        bounds_of(self.solid)
            .ok_or_else(|| OperationError::InvalidInput("empty solid has no bounds".into()).into())
    }
}

/// Center of the solid's bounding box.
///
/// # Errors
///
/// Returns an error if the solid is empty.
pub fn bounds_center(solid: &Solid) -> Result<Point3> {
    Ok(BoundingBox::new(solid).execute()?.center())
}

fn bounds_of(solid: &Solid) -> Option<Aabb> {
    match solid.node() {
        SolidNode::Empty => None,
        SolidNode::Prism(prism) => {
            let mut corners = prism.corners();
            let mut aabb = Aabb::around(corners.next()?);
            for corner in corners {
                aabb.include(&corner);
            }
            Some(aabb)
        }
        SolidNode::Union(children) => {
            let mut result: Option<Aabb> = None;
            for child in children {
                if let Some(b) = bounds_of(child) {
                    match result.as_mut() {
                        Some(acc) => acc.merge(&b),
                        None => result = Some(b),
                    }
                }
            }
            result
        }
        SolidNode::Difference(a, _) => bounds_of(a),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::operations::boolean::{Subtract, Union};
    use crate::operations::creation::MakeBox;
    use crate::operations::transform::Translate;

    #[test]
    fn box_bounds_are_half_extents() {
        let solid = MakeBox::new(Vector3::new(1.0, 2.0, 3.0)).execute().unwrap();
        let aabb = BoundingBox::new(&solid).execute().unwrap();
        assert_relative_eq!(aabb.min, Point3::new(-1.0, -2.0, -3.0));
        assert_relative_eq!(aabb.max, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn union_bounds_cover_both() {
        let a = MakeBox::new(Vector3::new(1.0, 1.0, 1.0)).execute().unwrap();
        let b = Translate::new(&a, Vector3::new(10.0, 0.0, 0.0)).execute();
        let aabb = BoundingBox::new(&Union::new(&a, &b).execute()).execute().unwrap();
        assert_relative_eq!(aabb.size(), Vector3::new(12.0, 2.0, 2.0));
        assert_relative_eq!(bounds_center(&b).unwrap(), Point3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn difference_bounds_follow_minuend() {
        let a = MakeBox::new(Vector3::new(2.0, 2.0, 2.0)).execute().unwrap();
        let b = MakeBox::new(Vector3::new(5.0, 0.5, 0.5)).execute().unwrap();
        let aabb = BoundingBox::new(&Subtract::new(&a, &b).execute()).execute().unwrap();
        assert_relative_eq!(aabb.size(), Vector3::new(4.0, 4.0, 4.0));
    }

    #[test]
    fn empty_solid_has_no_bounds() {
        assert!(BoundingBox::new(&Solid::empty()).execute().is_err());
    }
}
