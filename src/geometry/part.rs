use crate::error::Result;
use crate::math::Matrix4;

use super::{Connector, Connectors, Solid, Transformable};

/// A solid together with the named connectors it exposes.
///
/// The connectors live next to the solid rather than inside it, and every
/// transform moves both together.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    solid: Solid,
    connectors: Connectors,
}

impl Part {
    /// Wraps a solid with no connectors.
    #[must_use]
    pub fn new(solid: Solid) -> Self {
        Self {
            solid,
            connectors: Connectors::new(),
        }
    }

    /// Returns this part with `connector` registered under `name`.
    #[must_use]
    pub fn with_connector(mut self, name: impl Into<String>, connector: Connector) -> Self {
        self.connectors.insert(name, connector);
        self
    }

    /// Returns the solid.
    #[must_use]
    pub fn solid(&self) -> &Solid {
        &self.solid
    }

    /// Returns the connector map.
    #[must_use]
    pub fn connectors(&self) -> &Connectors {
        &self.connectors
    }

    pub(crate) fn connectors_mut(&mut self) -> &mut Connectors {
        &mut self.connectors
    }

    /// Returns the connector registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the part exposes no such connector.
    pub fn connector(&self, name: &str) -> Result<&Connector> {
        self.connectors.get(name)
    }

    /// Splits the part into its solid and connectors.
    #[must_use]
    pub fn into_parts(self) -> (Solid, Connectors) {
        (self.solid, self.connectors)
    }
}

impl From<Solid> for Part {
    fn from(solid: Solid) -> Self {
        Self::new(solid)
    }
}

impl Transformable for Part {
    fn transformed(&self, matrix: &Matrix4) -> Self {
        Self {
            solid: self.solid.transformed(matrix),
            connectors: self.connectors.transformed(matrix),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::CENTER;
    use crate::math::{Point3, Vector3};

    #[test]
    fn transform_moves_connectors_with_solid() {
        let part = Part::new(Solid::empty())
            .with_connector(CENTER, Connector::upright(Point3::origin()));
        let m = Matrix4::new_translation(&Vector3::new(1.0, 2.0, 3.0));
        let moved = part.transformed(&m);
        assert_relative_eq!(
            *moved.connector(CENTER).unwrap().origin(),
            Point3::new(1.0, 2.0, 3.0)
        );
        assert_relative_eq!(*part.connector(CENTER).unwrap().origin(), Point3::origin());
    }

    #[test]
    fn missing_connector_is_error() {
        let part = Part::from(Solid::empty());
        assert!(part.connector(CENTER).is_err());
    }
}
