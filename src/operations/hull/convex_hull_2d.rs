use spade::{DelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};

use crate::error::{OperationError, Result};
use crate::geometry::Outline;
use crate::math::Point2;

/// Computes the convex hull of a set of outlines.
///
/// All vertices are fed to a Delaunay triangulation whose outer face is
/// the hull. The result is a counter-clockwise [`Outline`] without
/// collinear vertices.
pub struct ConvexHull2D<'a> {
    outlines: &'a [Outline],
}

impl<'a> ConvexHull2D<'a> {
    /// Creates a new `ConvexHull2D` operation.
    #[must_use]
    pub fn new(outlines: &'a [Outline]) -> Self {
        Self { outlines }
    }

    /// Executes the hull computation.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if no outlines are given or a
    /// vertex cannot be triangulated, and a geometry error if all vertices
    /// are collinear.
    pub fn execute(&self) -> Result<Outline> {
        if self.outlines.is_empty() {
            return Err(OperationError::InvalidInput("hull of no outlines".into()).into());
        }

        let mut triangulation = DelaunayTriangulation::<SpadePoint2<f64>>::new();
        for vertex in self.outlines.iter().flat_map(Outline::vertices) {
            triangulation
                .insert(SpadePoint2::new(vertex.x, vertex.y))
                .map_err(|e: InsertionError| {
                    OperationError::InvalidInput(format!("hull vertex: {e}"))
                })?;
        }

        let points: Vec<Point2> = triangulation
            .convex_hull()
            .map(|edge| {
                let p = edge.from().position();
                Point2::new(p.x, p.y)
            })
            .collect();
        Outline::new(points)
    }
}
