use crate::geometry::{Solid, SolidNode};

/// Computes the boolean union of two solids.
pub struct Union<'a> {
    solid_a: &'a Solid,
    solid_b: &'a Solid,
}

impl<'a> Union<'a> {
    /// Creates a new `Union` operation.
    #[must_use]
    pub fn new(solid_a: &'a Solid, solid_b: &'a Solid) -> Self {
        Self { solid_a, solid_b }
    }

    /// Executes the union, returning the combined solid.
    #[must_use]
    pub fn execute(&self) -> Solid {
        UnionAll::new([self.solid_a, self.solid_b]).execute()
    }
}

/// Computes the boolean union of any number of solids.
///
/// Nested unions are flattened and empty operands dropped. The union of
/// nothing is the empty solid.
pub struct UnionAll<'a> {
    solids: Vec<&'a Solid>,
}

impl<'a> UnionAll<'a> {
    /// Creates a new `UnionAll` operation.
    #[must_use]
    pub fn new(solids: impl IntoIterator<Item = &'a Solid>) -> Self {
        Self {
            solids: solids.into_iter().collect(),
        }
    }

    /// Executes the union, returning the combined solid.
    #[must_use]
    pub fn execute(&self) -> Solid {
        let mut children = Vec::with_capacity(self.solids.len());
        for solid in &self.solids {
            match solid.node() {
                SolidNode::Empty => {}
                SolidNode::Union(nested) => children.extend(nested.iter().cloned()),
                _ => children.push((*solid).clone()),
            }
        }
        match children.len() {
            0 => Solid::empty(),
            1 => children.swap_remove(0),
            _ => Solid::union_of(children),
        }
    }
}
