use crate::geometry::{Prism, Solid, SolidNode};
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::polygon_2d::point_in_polygon_2d;
use crate::math::{Point2, Point3};

/// Distance within which a point counts as lying on a surface.
const BOUNDARY_TOLERANCE: f64 = 1e-7;

/// Classification of a point relative to a solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    Inside,
    Outside,
    OnBoundary,
}

/// Classifies a point as inside, outside, or on the boundary of a solid.
///
/// Each prism leaf is tested in its own local frame; unions and differences
/// combine the results of their children.
#[must_use]
pub fn classify_point_in_solid(point: &Point3, solid: &Solid) -> PointClassification {
    use PointClassification::{Inside, OnBoundary, Outside};

    match solid.node() {
        SolidNode::Empty => Outside,
        SolidNode::Prism(prism) => classify_in_prism(point, prism),
        SolidNode::Union(children) => {
            let mut result = Outside;
            for child in children {
                match classify_point_in_solid(point, child) {
                    Inside => return Inside,
                    OnBoundary => result = OnBoundary,
                    Outside => {}
                }
            }
            result
        }
        SolidNode::Difference(a, b) => match (
            classify_point_in_solid(point, a),
            classify_point_in_solid(point, b),
        ) {
            (Outside, _) | (_, Inside) => Outside,
            (Inside, Outside) => Inside,
            _ => OnBoundary,
        },
    }
}

fn classify_in_prism(point: &Point3, prism: &Prism) -> PointClassification {
    // Singular placements enclose no volume
    let Some(inverse) = prism.placement().try_inverse() else {
        return PointClassification::Outside;
    };
    let local = inverse.transform_point(point);
    let height = prism.height();

    if local.z < -BOUNDARY_TOLERANCE || local.z > height + BOUNDARY_TOLERANCE {
        return PointClassification::Outside;
    }

    let flat = Point2::new(local.x, local.y);
    let profile = prism.profile();
    let n = profile.len();
    let on_edge = (0..n)
        .any(|i| point_to_segment_dist(&flat, &profile[i], &profile[(i + 1) % n]) < BOUNDARY_TOLERANCE);
    if on_edge {
        return PointClassification::OnBoundary;
    }
    if !point_in_polygon_2d(&flat, profile) {
        return PointClassification::Outside;
    }
    if local.z.abs() < BOUNDARY_TOLERANCE || (local.z - height).abs() < BOUNDARY_TOLERANCE {
        return PointClassification::OnBoundary;
    }
    PointClassification::Inside
}
