use slotmap::SecondaryMap;
use tracing::{debug, instrument, trace};

use crate::error::{LayoutError, Result};
use crate::geometry::Connector;

use super::{DescriptorId, DescriptorMatrix, ParentLink};

/// Places every linked descriptor of a matrix onto its parent.
///
/// Descriptors are visited in row-major order. A cell parent must already
/// have been visited in the same pass; an external parent is always ready.
/// Roots are left where they are. Each placement starts from the part the
/// descriptor was built with, so running the pass again on its own output
/// reproduces the same geometry, and attaching a new parent to the root
/// only moves the root and its descendants.
pub struct ResolveConnectors<'a> {
    matrix: &'a DescriptorMatrix,
    center: bool,
}

impl<'a> ResolveConnectors<'a> {
    /// Creates a new `ResolveConnectors` operation.
    #[must_use]
    pub fn new(matrix: &'a DescriptorMatrix) -> Self {
        Self {
            matrix,
            center: false,
        }
    }

    /// Re-centers each part on its bounding-box center before placing it.
    #[must_use]
    pub fn centered(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    /// Executes the pass, returning the resolved matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnresolvedParent`] if a descriptor's parent has
    /// not been placed earlier in the pass or its parent connector is
    /// missing, and a geometry error if a connector is missing from the
    /// parent or is degenerate.
    #[instrument(skip_all, fields(center = self.center))]
    pub fn execute(&self) -> Result<DescriptorMatrix> {
        let mut resolved = self.matrix.clone();
        let mut visited: SecondaryMap<DescriptorId, ()> = SecondaryMap::new();
        let mut placed = 0_usize;

        let ids: Vec<DescriptorId> = resolved.ids().collect();
        for id in ids {
            let Some((connector, target)) = parent_frames(&resolved, id, &visited)? else {
                visited.insert(id, ());
                continue;
            };
            if let Some(descriptor) = resolved.descriptor_mut(id) {
                descriptor.place(connector, &target, self.center)?;
                trace!(position = %descriptor.position(), "placed descriptor");
                placed += 1;
            }
            visited.insert(id, ());
        }

        debug!(placed, "resolved matrix connectors");
        Ok(resolved)
    }
}

/// Own and parent connectors for `id`, or `None` for a root.
fn parent_frames(
    matrix: &DescriptorMatrix,
    id: DescriptorId,
    visited: &SecondaryMap<DescriptorId, ()>,
) -> Result<Option<(Connector, Connector)>> {
    let Some(descriptor) = matrix.descriptor(id) else {
        return Ok(None);
    };
    let position = descriptor.position();
    let unresolved = || LayoutError::UnresolvedParent {
        row: position.row,
        col: position.col,
    };

    let parent_part = match descriptor.parent() {
        ParentLink::Root => return Ok(None),
        ParentLink::Cell(parent) => {
            if !visited.contains_key(*parent) {
                return Err(unresolved().into());
            }
            matrix.descriptor(*parent).ok_or_else(unresolved)?.part()
        }
        ParentLink::External(part) => part,
    };
    let connector = *descriptor.parent_connector().ok_or_else(unresolved)?;
    let target = *parent_part.connector(descriptor.parent_connector_name())?;
    Ok(Some((connector, target)))
}
