//! Switch placement grids.
//!
//! A layout is built in two separate passes. [`BuildMatrix`] turns a
//! placement mask into a [`DescriptorMatrix`] whose descriptors only know
//! their parent and the connector joining them to it. [`ResolveConnectors`]
//! then walks the matrix in row-major order and places every descriptor on
//! its parent. [`Perimeter`] derives the hull that encloses a resolved
//! matrix.

pub mod build;
pub mod descriptor;
pub mod matrix;
pub mod perimeter;
pub mod resolve;

use std::fmt;

pub use build::{BuildMatrix, MatrixLayout};
pub use descriptor::{Descriptor, DescriptorId, ParentLink, PARENT};
pub use matrix::DescriptorMatrix;
pub use perimeter::{Boundary, BoundarySquare, EdgeOffsets, HullParams, Perimeter};
pub use resolve::ResolveConnectors;

/// Row and column of a descriptor within its matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPosition {
    pub row: usize,
    pub col: usize,
}

impl GridPosition {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` if `self` comes strictly before `other` in row-major order.
    #[must_use]
    pub fn precedes(&self, other: &GridPosition) -> bool {
        self < other
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four sides a matrix perimeter is scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// All edges in scan order.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
        };
        f.write_str(name)
    }
}

/// Switch pitch of a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Distance between switch centers along a row (mm).
    pub x_spacing: f64,
    /// Distance between switch centers along a column (mm).
    pub y_spacing: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            x_spacing: 19.0,
            y_spacing: 19.0,
        }
    }
}
