use crate::geometry::Solid;

/// Computes the boolean subtraction of one solid from another.
pub struct Subtract<'a> {
    solid_a: &'a Solid,
    solid_b: &'a Solid,
}

impl<'a> Subtract<'a> {
    /// Creates a new `Subtract` operation (A - B).
    #[must_use]
    pub fn new(solid_a: &'a Solid, solid_b: &'a Solid) -> Self {
        Self { solid_a, solid_b }
    }

    /// Executes the subtraction, returning the remaining solid.
    #[must_use]
    pub fn execute(&self) -> Solid {
        if self.solid_a.is_empty() || self.solid_b.is_empty() {
            return self.solid_a.clone();
        }
        Solid::difference_of(self.solid_a.clone(), self.solid_b.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::SolidNode;
    use crate::math::Vector3;
    use crate::operations::creation::MakeBox;

    #[test]
    fn subtracting_nothing_is_identity() {
        let a = MakeBox::new(Vector3::new(1.0, 1.0, 1.0)).execute().unwrap();
        assert_eq!(Subtract::new(&a, &Solid::empty()).execute(), a);
        assert!(Subtract::new(&Solid::empty(), &a).execute().is_empty());
    }

    #[test]
    fn subtract_builds_difference_node() {
        let a = MakeBox::new(Vector3::new(2.0, 2.0, 2.0)).execute().unwrap();
        let b = MakeBox::new(Vector3::new(1.0, 1.0, 1.0)).execute().unwrap();
        let d = Subtract::new(&a, &b).execute();
        assert!(matches!(d.node(), SolidNode::Difference(_, _)));
        assert_eq!(d.prism_count(), 2);
    }
}
