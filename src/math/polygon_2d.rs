use super::{Point2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns `true` if `point` lies inside the closed polygon.
///
/// Points exactly on an edge may land on either side; callers that care
/// check the boundary distance first.
#[must_use]
pub fn point_in_polygon_2d(point: &Point2, polygon: &[Point2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    winding_number_2d(point, polygon) != 0
}

/// Winding number of `point` with respect to polygon `verts`.
///
/// Non-zero => inside, zero => outside.
fn winding_number_2d(point: &Point2, verts: &[Point2]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let a = verts[i];
        let b = verts[(i + 1) % n];

        if a.y <= point.y {
            if b.y > point.y && cross_2d(&a, &b, point) > 0.0 {
                winding += 1;
            }
        } else if b.y <= point.y && cross_2d(&a, &b, point) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Z component of `(b - a) x (p - a)`.
#[inline]
#[must_use]
pub fn cross_2d(a: &Point2, b: &Point2, p: &Point2) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Drops vertices that repeat their predecessor or sit on the straight
/// line between their neighbours.
#[must_use]
pub fn remove_collinear(points: &[Point2]) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for &pt in points {
        if out.last().is_some_and(|last| (pt - last).norm() < TOLERANCE) {
            continue;
        }
        out.push(pt);
    }
    if out.len() > 1 && (out[0] - out[out.len() - 1]).norm() < TOLERANCE {
        out.pop();
    }

    let mut changed = true;
    while changed && out.len() > 3 {
        changed = false;
        let n = out.len();
        for i in 0..n {
            let prev = out[(i + n - 1) % n];
            let next = out[(i + 1) % n];
            let span = (next - prev).norm().max(1.0);
            if (cross_2d(&prev, &next, &out[i]) / span).abs() < TOLERANCE {
                out.remove(i);
                changed = true;
                break;
            }
        }
    }
    out
}

/// Rotates a closed polygon so it starts at the leftmost vertex (smallest x),
/// breaking ties by smallest y. Ensures deterministic output for tests.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point2]) -> Vec<Point2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.x < b.x - TOLERANCE || (pt.x - b.x).abs() < TOLERANCE && pt.y < b.y {
            best = i;
        }
    }
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn unit_square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        assert_relative_eq!(signed_area_2d(&unit_square()), 1.0);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts: Vec<Point2> = unit_square().into_iter().rev().collect();
        assert_relative_eq!(signed_area_2d(&pts), -1.0);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[Point2::new(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn point_in_square() {
        let sq = unit_square();
        assert!(point_in_polygon_2d(&Point2::new(0.5, 0.5), &sq));
        assert!(!point_in_polygon_2d(&Point2::new(1.5, 0.5), &sq));
        assert!(!point_in_polygon_2d(&Point2::new(0.5, -0.1), &sq));
    }

    #[test]
    fn collinear_midpoints_removed() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
            Point2::new(0.0, 1.0),
        ];
        let cleaned = remove_collinear(&pts);
        assert_eq!(cleaned.len(), 4);
        assert_relative_eq!(signed_area_2d(&cleaned), 4.0);
    }

    #[test]
    fn canonical_start_rotation() {
        let pts = vec![
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 0.0),
        ];
        let rotated = rotate_to_canonical_start(&pts);
        assert!(rotated[0].x.abs() < TOLERANCE);
        assert!(rotated[0].y.abs() < TOLERANCE);
        assert_eq!(rotated.len(), 4);
    }
}
