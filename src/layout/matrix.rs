use slotmap::SlotMap;

use crate::error::{LayoutError, Result};
use crate::geometry::{Connector, Part};

use super::{Descriptor, DescriptorId, GridPosition, LayoutParams, ParentLink};

/// Arena of descriptors arranged in possibly ragged rows.
///
/// Descriptors refer to their parents by [`DescriptorId`]. A cell parent
/// must come strictly earlier in row-major order, which keeps the parent
/// graph acyclic and resolvable in a single row-major pass.
#[derive(Debug, Clone, Default)]
pub struct DescriptorMatrix {
    descriptors: SlotMap<DescriptorId, Descriptor>,
    rows: Vec<Vec<DescriptorId>>,
    params: LayoutParams,
}

impl DescriptorMatrix {
    /// Creates an empty matrix with the given pitch.
    #[must_use]
    pub fn new(params: LayoutParams) -> Self {
        Self {
            descriptors: SlotMap::with_key(),
            rows: Vec::new(),
            params,
        }
    }

    /// Appends a new, empty row and returns its index.
    pub(crate) fn push_row(&mut self) -> usize {
        self.rows.push(Vec::new());
        self.rows.len() - 1
    }

    /// Appends `descriptor` to the last row.
    pub(crate) fn push(&mut self, descriptor: Descriptor) -> DescriptorId {
        let id = self.descriptors.insert(descriptor);
        if let Some(row) = self.rows.last_mut() {
            row.push(id);
        } else {
            self.rows.push(vec![id]);
        }
        id
    }

    #[must_use]
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in `row`, zero if the row does not exist.
    #[must_use]
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// Length of the longest row.
    #[must_use]
    pub fn max_row_len(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Total number of cells, present or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Returns the id of the cell at `(row, col)`, if the cell exists.
    #[must_use]
    pub fn id_at(&self, row: usize, col: usize) -> Option<DescriptorId> {
        self.rows.get(row)?.get(col).copied()
    }

    /// Returns the descriptor with the given id.
    #[must_use]
    pub fn descriptor(&self, id: DescriptorId) -> Option<&Descriptor> {
        self.descriptors.get(id)
    }

    pub(crate) fn descriptor_mut(&mut self, id: DescriptorId) -> Option<&mut Descriptor> {
        self.descriptors.get_mut(id)
    }

    /// Returns the descriptor at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::CellNotFound`] if the cell does not exist.
    pub fn get(&self, row: usize, col: usize) -> Result<&Descriptor> {
        self.id_at(row, col)
            .and_then(|id| self.descriptors.get(id))
            .ok_or_else(|| LayoutError::CellNotFound { row, col }.into())
    }

    /// Returns the present descriptor at `(row, col)`, if any.
    #[must_use]
    pub fn present_at(&self, row: usize, col: usize) -> Option<&Descriptor> {
        self.id_at(row, col)
            .and_then(|id| self.descriptors.get(id))
            .filter(|d| d.is_present())
    }

    /// Ids of all cells in row-major order.
    pub fn ids(&self) -> impl Iterator<Item = DescriptorId> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// All descriptors in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.ids().filter_map(|id| self.descriptors.get(id))
    }

    /// Present descriptors in row-major order.
    pub fn present(&self) -> impl Iterator<Item = &Descriptor> {
        self.iter().filter(|d| d.is_present())
    }

    /// Links the cell at `position` to the earlier cell at `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::CellNotFound`] if either cell does not exist,
    /// or [`LayoutError::InvalidLink`] if `parent` does not come strictly
    /// before `position` in row-major order.
    pub fn link(
        &mut self,
        position: GridPosition,
        parent: GridPosition,
        connector: Connector,
    ) -> Result<()> {
        if !parent.precedes(&position) {
            return Err(LayoutError::InvalidLink {
                row: position.row,
                col: position.col,
                parent_row: parent.row,
                parent_col: parent.col,
            }
            .into());
        }
        let parent_id = self.id_at(parent.row, parent.col).ok_or(LayoutError::CellNotFound {
            row: parent.row,
            col: parent.col,
        })?;
        self.cell_mut(position)?
            .set_parent(ParentLink::Cell(parent_id), connector, None);
        Ok(())
    }

    /// Attaches the cell at `position` to a part outside this matrix.
    ///
    /// `connector` is expressed in the cell's own frame and is aligned onto
    /// the parent's connector named `connector_name` ([`CENTER`] if `None`)
    /// on the next resolve.
    ///
    /// [`CENTER`]: crate::geometry::CENTER
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::CellNotFound`] if the cell does not exist.
    pub fn attach_external(
        &mut self,
        position: GridPosition,
        parent: Part,
        connector: Connector,
        connector_name: Option<&str>,
    ) -> Result<()> {
        self.cell_mut(position)?.set_parent(
            ParentLink::External(parent),
            connector,
            connector_name.map(str::to_owned),
        );
        Ok(())
    }

    fn cell_mut(&mut self, position: GridPosition) -> Result<&mut Descriptor> {
        self.id_at(position.row, position.col)
            .and_then(|id| self.descriptors.get_mut(id))
            .ok_or_else(|| {
                LayoutError::CellNotFound {
                    row: position.row,
                    col: position.col,
                }
                .into()
            })
    }
}
