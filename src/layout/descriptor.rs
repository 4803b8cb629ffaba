use crate::error::Result;
use crate::geometry::{Connector, Part, CENTER};
use crate::math::Point3;
use crate::operations::query::bounds_center;
use crate::operations::transform::{Center, ConnectTo};

use super::GridPosition;

slotmap::new_key_type! {
    /// Unique identifier for a descriptor in its matrix.
    pub struct DescriptorId;
}

/// Name under which a descriptor's part records the connector that joins
/// it to its parent.
pub const PARENT: &str = "parent";

/// What a descriptor is attached to.
#[derive(Debug, Clone, PartialEq)]
pub enum ParentLink {
    /// Not attached; the descriptor stays where it was built.
    Root,
    /// Another descriptor of the same matrix.
    Cell(DescriptorId),
    /// A part that lives outside the matrix, such as a switch of another
    /// matrix or a plate.
    External(Part),
}

/// One switch placement of a matrix.
///
/// The descriptor keeps the part it was built with and, separately, the
/// part as last placed by a resolve pass. Placement is always recomputed
/// from the built part, so resolving twice yields the same geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    position: GridPosition,
    present: bool,
    base: Part,
    part: Part,
    parent: ParentLink,
    parent_connector: Option<Connector>,
    parent_connector_name: Option<String>,
}

impl Descriptor {
    /// Creates an unattached descriptor holding `part`.
    #[must_use]
    pub fn new(position: GridPosition, present: bool, part: Part) -> Self {
        Self {
            position,
            present,
            base: part.clone(),
            part,
            parent: ParentLink::Root,
            parent_connector: None,
            parent_connector_name: None,
        }
    }

    #[must_use]
    pub fn position(&self) -> GridPosition {
        self.position
    }

    /// Returns `true` if this cell holds an active switch.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Returns the part as currently placed.
    #[must_use]
    pub fn part(&self) -> &Part {
        &self.part
    }

    /// Returns the part as built, before any placement.
    #[must_use]
    pub fn base(&self) -> &Part {
        &self.base
    }

    #[must_use]
    pub fn parent(&self) -> &ParentLink {
        &self.parent
    }

    /// Connector, in this descriptor's own frame, that is aligned onto the
    /// parent's connector.
    #[must_use]
    pub fn parent_connector(&self) -> Option<&Connector> {
        self.parent_connector.as_ref()
    }

    /// Name of the parent connector to attach to, [`CENTER`] when unset.
    #[must_use]
    pub fn parent_connector_name(&self) -> &str {
        self.parent_connector_name.as_deref().unwrap_or(CENTER)
    }

    /// Center of the placed part's bounding box.
    ///
    /// # Errors
    ///
    /// Returns an error if the part's solid is empty.
    pub fn center(&self) -> Result<Point3> {
        bounds_center(self.part.solid())
    }

    pub(crate) fn set_parent(
        &mut self,
        parent: ParentLink,
        connector: Connector,
        connector_name: Option<String>,
    ) {
        self.parent = parent;
        self.parent_connector = Some(connector);
        self.parent_connector_name = connector_name;
    }

    /// Places the built part so `connector` lands on `target`.
    ///
    /// With `center` set the solid is centered on the origin first, while
    /// `connector` stays in the built part's frame. The first connector seen
    /// is recorded on the built part under [`PARENT`].
    pub(crate) fn place(
        &mut self,
        connector: Connector,
        target: &Connector,
        center: bool,
    ) -> Result<()> {
        self.base.connectors_mut().record(PARENT, connector);
        let base = if center {
            Center::new(&self.base).execute()?
        } else {
            self.base.clone()
        };
        self.part = ConnectTo::new(&base, connector, *target).execute()?;
        Ok(())
    }
}
