use crate::error::{GeometryError, OperationError, Result};
use crate::math::distance_2d::{closest_point_on_line, point_to_segment_dist};
use crate::math::polygon_2d::{
    point_in_polygon_2d, remove_collinear, rotate_to_canonical_start, signed_area_2d,
};
use crate::math::{Point2, TOLERANCE};

/// A closed, simple 2D polygon.
///
/// Vertices are stored counter-clockwise, without repeated or collinear
/// points, starting from the leftmost-bottom vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    vertices: Vec<Point2>,
}

/// One directed side of an [`Outline`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Side {
    /// Start vertex (counter-clockwise order).
    pub start: Point2,
    /// End vertex (counter-clockwise order).
    pub end: Point2,
}

/// An axis-aligned 2D bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl Outline {
    /// Creates an outline from points in either winding order.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if fewer than three distinct,
    /// non-collinear points remain or the enclosed area is zero.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        let mut vertices = remove_collinear(&points);
        if vertices.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "outline needs at least 3 distinct vertices, got {}",
                vertices.len()
            ))
            .into());
        }
        let area = signed_area_2d(&vertices);
        if area.abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("outline encloses no area".into()).into());
        }
        if area < 0.0 {
            vertices.reverse();
        }
        Ok(Self {
            vertices: rotate_to_canonical_start(&vertices),
        })
    }

    /// Returns the vertices in counter-clockwise order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Number of sides (equal to the number of vertices).
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`; an outline has at least three sides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns side `index`, wrapping around the outline.
    #[must_use]
    pub fn side(&self, index: usize) -> Side {
        let n = self.vertices.len();
        Side {
            start: self.vertices[index % n],
            end: self.vertices[(index + 1) % n],
        }
    }

    /// Iterates over all sides in counter-clockwise order.
    pub fn sides(&self) -> impl Iterator<Item = Side> + '_ {
        (0..self.vertices.len()).map(|i| self.side(i))
    }

    /// Returns the enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    /// Returns the bounding rectangle.
    #[must_use]
    pub fn bounds(&self) -> Bounds2 {
        let mut min = self.vertices[0];
        let mut max = self.vertices[0];
        for v in &self.vertices[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }
        Bounds2 { min, max }
    }

    /// Returns `true` if `point` is inside the outline or on its boundary.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        self.sides()
            .any(|s| point_to_segment_dist(point, &s.start, &s.end) < 1e-9)
            || point_in_polygon_2d(point, &self.vertices)
    }

    /// Index of the side lying on the minimum-X line, if any.
    #[must_use]
    pub fn side_on_min_x(&self) -> Option<usize> {
        let x = self.bounds().min.x;
        self.side_on_vertical(x)
    }

    /// Index of the side lying on the maximum-X line, if any.
    #[must_use]
    pub fn side_on_max_x(&self) -> Option<usize> {
        let x = self.bounds().max.x;
        self.side_on_vertical(x)
    }

    fn side_on_vertical(&self, x: f64) -> Option<usize> {
        self.sides()
            .position(|s| (s.start.x - x).abs() < TOLERANCE && (s.end.x - x).abs() < TOLERANCE)
    }

    /// Squares off the corner at the top of the maximum-X side.
    ///
    /// The end vertex of the side lying on the maximum-X line is moved up to
    /// the outline's maximum Y, so the right edge runs straight into the
    /// farthest corner. Vertices left collinear on the top edge are dropped.
    /// Applying this twice changes nothing.
    ///
    /// A convex outline has at most one side on that line. Outlines built
    /// from axis-aligned squares always have exactly one.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::Failed`] if no side lies on the maximum-X line.
    pub fn straighten_max_x(&self) -> Result<Self> {
        let index = self.side_on_max_x().ok_or_else(|| {
            OperationError::Failed("no outline side lies on the maximum-X line".into())
        })?;
        let top = self.bounds().max.y;
        let corner = (index + 1) % self.vertices.len();

        let mut vertices = self.vertices.clone();
        vertices[corner].y = top;
        Self::new(vertices)
    }
}

impl Side {
    /// Euclidean length of the side.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Angle (radians) of the side against the X axis, measured as
    /// `asin((start.y - end.y) / length)`.
    ///
    /// For a side traversed right-to-left this is the incline of the side
    /// read left-to-right.
    #[must_use]
    pub fn slope_angle(&self) -> f64 {
        let len = self.length();
        if len < TOLERANCE {
            return 0.0;
        }
        ((self.start.y - self.end.y) / len).clamp(-1.0, 1.0).asin()
    }

    /// Point on the infinite line through this side closest to `point`.
    #[must_use]
    pub fn closest_point_on_line(&self, point: &Point2) -> Point2 {
        closest_point_on_line(point, &self.start, &self.end)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use approx::assert_relative_eq;

    use super::*;

    fn pt(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn clockwise_input_is_reoriented() {
        let outline = Outline::new(vec![pt(0.0, 0.0), pt(0.0, 2.0), pt(3.0, 2.0), pt(3.0, 0.0)])
            .unwrap();
        assert_relative_eq!(outline.area(), 6.0);
        assert_eq!(outline.vertices()[0], pt(0.0, 0.0));
        assert_eq!(outline.vertices()[1], pt(3.0, 0.0));
    }

    #[test]
    fn degenerate_outline_rejected() {
        assert!(Outline::new(vec![pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0)]).is_err());
        assert!(Outline::new(vec![pt(0.0, 0.0), pt(1.0, 1.0)]).is_err());
    }

    #[test]
    fn contains_inside_and_boundary() {
        let outline =
            Outline::new(vec![pt(0.0, 0.0), pt(4.0, 0.0), pt(4.0, 4.0), pt(0.0, 4.0)]).unwrap();
        assert!(outline.contains(&pt(2.0, 2.0)));
        assert!(outline.contains(&pt(4.0, 1.0)));
        assert!(!outline.contains(&pt(4.5, 1.0)));
    }

    #[test]
    fn vertical_sides_found() {
        let outline =
            Outline::new(vec![pt(0.0, 0.0), pt(4.0, 0.0), pt(4.0, 4.0), pt(0.0, 4.0)]).unwrap();
        let right = outline.side(outline.side_on_max_x().unwrap());
        assert_eq!(right.start, pt(4.0, 0.0));
        assert_eq!(right.end, pt(4.0, 4.0));
        let left = outline.side(outline.side_on_min_x().unwrap());
        assert_eq!(left.start, pt(0.0, 4.0));
        assert_eq!(left.end, pt(0.0, 0.0));
    }

    #[test]
    fn straighten_moves_kinked_corner() {
        // Right edge tops out at y = 3, the outline peaks at y = 5.
        let outline = Outline::new(vec![
            pt(0.0, 0.0),
            pt(10.0, 0.0),
            pt(10.0, 3.0),
            pt(6.0, 5.0),
            pt(0.0, 5.0),
        ])
        .unwrap();
        let straight = outline.straighten_max_x().unwrap();
        // (6, 5) now sits on the top edge and is dropped.
        assert_eq!(straight.len(), 4);
        assert_eq!(straight.vertices()[2], pt(10.0, 5.0));
        assert_eq!(straight.straighten_max_x().unwrap(), straight);
    }

    #[test]
    fn straighten_requires_vertical_max_side() {
        let triangle = Outline::new(vec![pt(0.0, 0.0), pt(4.0, 1.0), pt(0.0, 2.0)]).unwrap();
        assert!(triangle.straighten_max_x().is_err());
    }

    #[test]
    fn slope_of_descending_side() {
        let side = Side {
            start: pt(2.0, 2.0),
            end: pt(0.0, 0.0),
        };
        assert_relative_eq!(side.slope_angle(), FRAC_PI_4, epsilon = 1e-12);
        assert_relative_eq!(side.length(), 8f64.sqrt());
        let c = side.closest_point_on_line(&pt(0.0, 2.0));
        assert_relative_eq!(c, pt(1.0, 1.0), epsilon = 1e-12);
    }
}
