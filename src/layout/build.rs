use tracing::{debug, instrument};

use crate::error::{OperationError, Result};
use crate::geometry::{Connector, Part};
use crate::math::Point3;

use super::{Descriptor, DescriptorMatrix, GridPosition, LayoutParams};

/// Placement mask and offsets describing one switch grid.
///
/// Column offsets shift a switch along Y relative to its left neighbour;
/// row offsets shift the first switch of a row along X relative to the
/// first switch of the previous row. Missing offsets count as zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatrixLayout {
    pub mask: Vec<Vec<bool>>,
    pub column_offsets: Vec<f64>,
    pub row_offsets: Vec<f64>,
}

impl MatrixLayout {
    /// Creates a layout from a boolean mask, with no offsets.
    #[must_use]
    pub fn new(mask: Vec<Vec<bool>>) -> Self {
        Self {
            mask,
            column_offsets: Vec::new(),
            row_offsets: Vec::new(),
        }
    }

    /// Creates a layout from rows of `0`/`1` flags.
    #[must_use]
    pub fn from_bits(rows: &[&[u8]]) -> Self {
        Self::new(
            rows.iter()
                .map(|row| row.iter().map(|&bit| bit == 1).collect())
                .collect(),
        )
    }

    #[must_use]
    pub fn with_column_offsets(mut self, offsets: Vec<f64>) -> Self {
        self.column_offsets = offsets;
        self
    }

    #[must_use]
    pub fn with_row_offsets(mut self, offsets: Vec<f64>) -> Self {
        self.row_offsets = offsets;
        self
    }

    fn column_offset(&self, col: usize) -> f64 {
        self.column_offsets.get(col).copied().unwrap_or(0.0)
    }

    fn row_offset(&self, row: usize) -> f64 {
        self.row_offsets.get(row).copied().unwrap_or(0.0)
    }
}

/// Builds an unresolved [`DescriptorMatrix`] from a [`MatrixLayout`].
///
/// Every cell, present or not, receives a copy of the switch part. Each
/// cell is linked to its left neighbour, and the first cell of a row to
/// the first cell of the row above. Cell (0, 0) is left as the root. No
/// part is moved here; see [`ResolveConnectors`](super::ResolveConnectors).
pub struct BuildMatrix<'a> {
    layout: &'a MatrixLayout,
    switch: &'a Part,
    params: LayoutParams,
}

impl<'a> BuildMatrix<'a> {
    /// Creates a new `BuildMatrix` operation with the default pitch.
    #[must_use]
    pub fn new(layout: &'a MatrixLayout, switch: &'a Part) -> Self {
        Self {
            layout,
            switch,
            params: LayoutParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: LayoutParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the build.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the mask has no cells, or
    /// a layout error if a row is empty so the next row has no parent.
    #[instrument(skip_all)]
    pub fn execute(&self) -> Result<DescriptorMatrix> {
        let mask = &self.layout.mask;
        if mask.iter().all(Vec::is_empty) {
            return Err(OperationError::InvalidInput("placement mask has no cells".into()).into());
        }

        let mut matrix = DescriptorMatrix::new(self.params);
        for (row, flags) in mask.iter().enumerate() {
            matrix.push_row();
            for (col, &present) in flags.iter().enumerate() {
                matrix.push(Descriptor::new(
                    GridPosition::new(row, col),
                    present,
                    self.switch.clone(),
                ));
            }
        }

        let (x, y) = (self.params.x_spacing, self.params.y_spacing);
        for (row, flags) in mask.iter().enumerate() {
            for col in 0..flags.len() {
                let position = GridPosition::new(row, col);
                if col > 0 {
                    let offset = Point3::new(-x, -self.layout.column_offset(col), 0.0);
                    matrix.link(
                        position,
                        GridPosition::new(row, col - 1),
                        Connector::upright(offset),
                    )?;
                } else if row > 0 {
                    let offset = Point3::new(-self.layout.row_offset(row), y, 0.0);
                    matrix.link(
                        position,
                        GridPosition::new(row - 1, 0),
                        Connector::upright(offset),
                    )?;
                }
            }
        }

        debug!(
            rows = matrix.row_count(),
            cells = matrix.len(),
            present = matrix.present().count(),
            "built descriptor matrix"
        );
        Ok(matrix)
    }
}
