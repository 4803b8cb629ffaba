use tracing::{debug, instrument};

use crate::error::{LayoutError, Result};
use crate::geometry::Outline;
use crate::math::{Point2, Vector2};
use crate::operations::creation::MakeRectangle;
use crate::operations::hull::ConvexHull2D;

use super::{Descriptor, DescriptorMatrix, Edge, GridPosition};

/// Per-edge displacement applied to boundary switches before measuring.
///
/// Top and bottom offsets move along Y, left and right offsets along X.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeOffsets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl EdgeOffsets {
    /// Displacement for switches found from `edge`.
    #[must_use]
    pub fn along(&self, edge: Edge) -> Vector2 {
        match edge {
            Edge::Top => Vector2::new(0.0, self.top),
            Edge::Right => Vector2::new(self.right, 0.0),
            Edge::Bottom => Vector2::new(0.0, self.bottom),
            Edge::Left => Vector2::new(self.left, 0.0),
        }
    }
}

/// Parameters of a perimeter hull.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HullParams {
    /// Extra half-width added around every boundary switch (mm).
    pub clearance: f64,
    pub offsets: EdgeOffsets,
    /// Square off the corner above the maximum-X side of the hull.
    pub straighten_max_x: bool,
}

impl HullParams {
    #[must_use]
    pub fn with_clearance(clearance: f64) -> Self {
        Self {
            clearance,
            ..Self::default()
        }
    }
}

/// A square drawn around one boundary switch.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundarySquare {
    /// Edge the switch was found from.
    pub edge: Edge,
    pub position: GridPosition,
    /// Square center, after the edge offset.
    pub center: Point2,
    pub square: Outline,
}

/// The outcome of a perimeter scan.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    /// Squares in scan order: top, right, bottom, left.
    pub squares: Vec<BoundarySquare>,
    /// Convex hull of all squares, straightened if requested.
    pub outline: Outline,
}

/// Computes the outline enclosing a resolved matrix.
///
/// Each edge is scanned line by line (columns for top and bottom, rows for
/// left and right), keeping the first present switch seen from the outside.
/// A square of half-width `y_spacing / 2 + clearance` is drawn around each
/// of those switches, and the hull of all squares is the outline.
pub struct Perimeter<'a> {
    matrix: &'a DescriptorMatrix,
    params: HullParams,
}

impl<'a> Perimeter<'a> {
    /// Creates a new `Perimeter` operation.
    #[must_use]
    pub fn new(matrix: &'a DescriptorMatrix, params: HullParams) -> Self {
        Self { matrix, params }
    }

    /// Executes the scan and hull.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyMatrix`] if any scan line holds no present
    /// switch, and an operation error if straightening finds no side on
    /// the maximum-X line.
    #[instrument(skip_all, fields(clearance = self.params.clearance))]
    pub fn execute(&self) -> Result<Boundary> {
        if self.matrix.present().next().is_none() {
            return Err(LayoutError::EmptyMatrix {
                edge: Edge::Top,
                line: 0,
            }
            .into());
        }

        let radius = self.matrix.params().y_spacing / 2.0 + self.params.clearance;
        let mut squares = Vec::new();
        for edge in Edge::ALL {
            let offset = self.params.offsets.along(edge);
            for descriptor in scan(self.matrix, edge)? {
                let center = descriptor.center()?;
                let center = Point2::new(center.x, center.y) + offset;
                squares.push(BoundarySquare {
                    edge,
                    position: descriptor.position(),
                    center,
                    square: MakeRectangle::new(center, radius).execute()?,
                });
            }
        }

        let outlines: Vec<Outline> = squares.iter().map(|s| s.square.clone()).collect();
        let mut outline = ConvexHull2D::new(&outlines).execute()?;
        if self.params.straighten_max_x {
            outline = outline.straighten_max_x()?;
        }

        debug!(
            squares = squares.len(),
            vertices = outline.len(),
            "computed perimeter hull"
        );
        Ok(Boundary { squares, outline })
    }
}

/// First present switch of every scan line of `edge`, in scan order.
fn scan(matrix: &DescriptorMatrix, edge: Edge) -> Result<Vec<&Descriptor>> {
    let rows = matrix.row_count();
    let cols = matrix.max_row_len();
    let lines: Vec<(usize, Vec<GridPosition>)> = match edge {
        Edge::Top => (0..cols)
            .map(|col| (col, (0..rows).map(|row| GridPosition::new(row, col)).collect()))
            .collect(),
        Edge::Right => (0..rows)
            .map(|row| {
                let cells = (0..matrix.row_len(row))
                    .rev()
                    .map(|col| GridPosition::new(row, col));
                (row, cells.collect())
            })
            .collect(),
        Edge::Bottom => (0..cols)
            .rev()
            .map(|col| {
                let cells = (0..rows).rev().map(|row| GridPosition::new(row, col));
                (col, cells.collect())
            })
            .collect(),
        Edge::Left => (0..rows)
            .rev()
            .map(|row| {
                let cells = (0..matrix.row_len(row)).map(|col| GridPosition::new(row, col));
                (row, cells.collect())
            })
            .collect(),
    };

    lines
        .into_iter()
        .map(|(line, cells)| {
            cells
                .into_iter()
                .find_map(|p| matrix.present_at(p.row, p.col))
                .ok_or_else(|| LayoutError::EmptyMatrix { edge, line }.into())
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::KeyplateError;
    use crate::geometry::Part;
    use crate::layout::{BuildMatrix, MatrixLayout, ResolveConnectors};
    use crate::operations::creation::{MakeSwitchHole, SwitchHoleParams};

    fn resolved(layout: &MatrixLayout) -> DescriptorMatrix {
        let switch: Part = MakeSwitchHole::new(SwitchHoleParams::default()).execute().unwrap();
        let m = BuildMatrix::new(layout, &switch).execute().unwrap();
        ResolveConnectors::new(&m).centered(true).execute().unwrap()
    }

    #[test]
    fn dense_square_grid_hull_is_rectangle() {
        let m = resolved(&MatrixLayout::from_bits(&[&[1, 1], &[1, 1]]));
        let boundary = Perimeter::new(&m, HullParams::default()).execute().unwrap();
        let outline = &boundary.outline;
        assert_eq!(outline.len(), 4);
        let b = outline.bounds();
        assert_relative_eq!(b.max.x - b.min.x, 38.0, epsilon = 1e-9);
        assert_relative_eq!(b.max.y - b.min.y, 38.0, epsilon = 1e-9);
        assert_relative_eq!(outline.area(), 38.0 * 38.0, epsilon = 1e-6);
    }

    #[test]
    fn clearance_inflates_hull() {
        let m = resolved(&MatrixLayout::from_bits(&[&[1, 1, 1]]));
        let boundary = Perimeter::new(&m, HullParams::with_clearance(3.0))
            .execute()
            .unwrap();
        let b = boundary.outline.bounds();
        assert_relative_eq!(b.min.x, -12.5, epsilon = 1e-9);
        assert_relative_eq!(b.max.x, 50.5, epsilon = 1e-9);
        assert_relative_eq!(b.max.y - b.min.y, 25.0, epsilon = 1e-9);
    }

    #[test]
    fn scans_pick_outermost_present_switches() {
        let m = resolved(&MatrixLayout::from_bits(&[&[0, 1, 1], &[1, 1, 1], &[1, 1, 0]]));
        let boundary = Perimeter::new(&m, HullParams::default()).execute().unwrap();
        let found = |edge: Edge| -> Vec<GridPosition> {
            boundary
                .squares
                .iter()
                .filter(|s| s.edge == edge)
                .map(|s| s.position)
                .collect()
        };
        let g = GridPosition::new;
        assert_eq!(found(Edge::Top), vec![g(1, 0), g(0, 1), g(0, 2)]);
        assert_eq!(found(Edge::Right), vec![g(0, 2), g(1, 2), g(2, 1)]);
        assert_eq!(found(Edge::Bottom), vec![g(1, 2), g(2, 1), g(2, 0)]);
        assert_eq!(found(Edge::Left), vec![g(2, 0), g(1, 0), g(0, 1)]);
    }

    #[test]
    fn hull_contains_every_square_center() {
        let layout = MatrixLayout::from_bits(&[&[1, 1, 1, 1], &[1, 0, 1, 1], &[0, 0, 1]])
            .with_column_offsets(vec![0.0, -4.0, 14.0, 5.0])
            .with_row_offsets(vec![0.0, 2.0, -3.0]);
        let m = resolved(&layout);
        let params = HullParams {
            clearance: 2.0,
            offsets: EdgeOffsets {
                top: 5.0,
                bottom: -25.0,
                ..EdgeOffsets::default()
            },
            straighten_max_x: false,
        };
        let boundary = Perimeter::new(&m, params).execute().unwrap();
        for square in &boundary.squares {
            assert!(boundary.outline.contains(&square.center));
            for v in square.square.vertices() {
                assert!(boundary.outline.contains(v));
            }
        }
    }

    #[test]
    fn edge_offsets_move_scanned_squares() {
        let m = resolved(&MatrixLayout::from_bits(&[&[1]]));
        let params = HullParams {
            offsets: EdgeOffsets {
                top: 5.0,
                bottom: -25.0,
                ..EdgeOffsets::default()
            },
            ..HullParams::default()
        };
        let boundary = Perimeter::new(&m, params).execute().unwrap();
        let b = boundary.outline.bounds();
        assert_relative_eq!(b.max.y, 14.5, epsilon = 1e-9);
        assert_relative_eq!(b.min.y, -34.5, epsilon = 1e-9);
    }

    #[test]
    fn straightening_squares_the_max_x_corner() {
        let layout = MatrixLayout::from_bits(&[&[1, 1]]).with_column_offsets(vec![0.0, -10.0]);
        let m = resolved(&layout);
        let params = HullParams {
            straighten_max_x: true,
            ..HullParams::default()
        };
        let boundary = Perimeter::new(&m, params).execute().unwrap();
        let b = boundary.outline.bounds();
        assert!(boundary
            .outline
            .vertices()
            .iter()
            .any(|v| (v.x - b.max.x).abs() < 1e-9 && (v.y - b.max.y).abs() < 1e-9));
    }

    #[test]
    fn empty_row_raises_empty_matrix() {
        let m = resolved(&MatrixLayout::from_bits(&[&[1, 1], &[0, 0]]));
        let err = Perimeter::new(&m, HullParams::default()).execute().unwrap_err();
        assert!(matches!(
            err,
            KeyplateError::Layout(LayoutError::EmptyMatrix {
                edge: Edge::Right,
                line: 1
            })
        ));
    }

    #[test]
    fn empty_column_raises_empty_matrix() {
        let m = resolved(&MatrixLayout::from_bits(&[&[1, 0], &[1, 0]]));
        let err = Perimeter::new(&m, HullParams::default()).execute().unwrap_err();
        assert!(matches!(
            err,
            KeyplateError::Layout(LayoutError::EmptyMatrix {
                edge: Edge::Top,
                line: 1
            })
        ));
    }

    #[test]
    fn removing_one_cell_keeps_scans_valid() {
        let m = resolved(&MatrixLayout::from_bits(&[&[1, 1, 1], &[1, 0, 1], &[1, 1, 1]]));
        assert!(Perimeter::new(&m, HullParams::default()).execute().is_ok());
    }
}
