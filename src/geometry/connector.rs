use std::collections::BTreeMap;
use std::f64::consts::PI;

use nalgebra::{Translation3, Unit};

use crate::error::{GeometryError, OperationError, Result};
use crate::math::{Isometry3, Matrix4, Point3, UnitQuaternion, Vector3, TOLERANCE};

use super::Transformable;

/// Name of the connector every switch hole exposes at its own origin.
pub const CENTER: &str = "center";

/// A local reference frame at which two solids can be joined.
///
/// `axis` is the direction solids are joined along; `orientation` fixes
/// the rotation about that axis. Neither vector needs to be normalized,
/// but they must be non-zero and not parallel for [`compose`] to succeed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    origin: Point3,
    axis: Vector3,
    orientation: Vector3,
}

impl Connector {
    /// Creates a connector from an origin, a primary axis and an orientation axis.
    #[must_use]
    pub fn new(origin: Point3, axis: Vector3, orientation: Vector3) -> Self {
        Self {
            origin,
            axis,
            orientation,
        }
    }

    /// Connector with axis +Z and orientation +Y, the frame used for every
    /// joint on a flat plate.
    #[must_use]
    pub fn upright(origin: Point3) -> Self {
        Self::new(origin, Vector3::z(), Vector3::y())
    }

    /// Returns the origin point.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the primary axis as given.
    #[must_use]
    pub fn axis(&self) -> &Vector3 {
        &self.axis
    }

    /// Returns the orientation axis as given.
    #[must_use]
    pub fn orientation(&self) -> &Vector3 {
        &self.orientation
    }

    /// Unit axis and the unit orientation component perpendicular to it.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidConnector`] if either vector is
    /// zero-length or the two are parallel.
    fn frame(&self) -> Result<(Unit<Vector3>, Vector3)> {
        let axis_len = self.axis.norm();
        if axis_len < TOLERANCE {
            return Err(GeometryError::InvalidConnector("zero-length axis".into()).into());
        }
        let orientation_len = self.orientation.norm();
        if orientation_len < TOLERANCE {
            return Err(GeometryError::InvalidConnector("zero-length orientation".into()).into());
        }

        let axis = self.axis / axis_len;
        let orientation = self.orientation / orientation_len;
        let perpendicular = orientation - axis * orientation.dot(&axis);
        let perpendicular_len = perpendicular.norm();
        if perpendicular_len < TOLERANCE {
            return Err(GeometryError::InvalidConnector(format!(
                "orientation ({}, {}, {}) is parallel to axis ({}, {}, {})",
                self.orientation.x,
                self.orientation.y,
                self.orientation.z,
                self.axis.x,
                self.axis.y,
                self.axis.z
            ))
            .into());
        }

        Ok((Unit::new_unchecked(axis), perpendicular / perpendicular_len))
    }
}

impl Transformable for Connector {
    fn transformed(&self, matrix: &Matrix4) -> Self {
        Self {
            origin: matrix.transform_point(&self.origin),
            axis: matrix.transform_vector(&self.axis),
            orientation: matrix.transform_vector(&self.orientation),
        }
    }
}

/// Computes the rigid transform that moves `source` onto `target`.
///
/// The source origin lands on the target origin, the source axis is turned
/// onto the target axis, and the source orientation is then spun about that
/// axis until it matches the target orientation. `rotation` (radians,
/// right-handed about the target axis) is added after alignment.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidConnector`] if either connector is degenerate.
pub fn compose(source: &Connector, target: &Connector, rotation: f64) -> Result<Isometry3> {
    let (source_axis, source_orientation) = source.frame()?;
    let (target_axis, target_orientation) = target.frame()?;

    let align = UnitQuaternion::rotation_between_axis(&source_axis, &target_axis)
        .unwrap_or_else(|| UnitQuaternion::from_axis_angle(&any_perpendicular(&source_axis), PI));

    let turned = align * source_orientation;
    let sin = target_axis.dot(&turned.cross(&target_orientation));
    let cos = turned.dot(&target_orientation);
    let twist = UnitQuaternion::from_axis_angle(&target_axis, sin.atan2(cos) + rotation);

    let rotation = twist * align;
    let translation = target.origin.coords - rotation * source.origin.coords;
    Ok(Isometry3::from_parts(
        Translation3::from(translation),
        rotation,
    ))
}

/// A unit vector perpendicular to `v`.
fn any_perpendicular(v: &Unit<Vector3>) -> Unit<Vector3> {
    // Choose a reference vector not parallel to v
    let reference = if v.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    Unit::new_normalize(v.cross(&reference))
}

/// Named attachment points carried alongside a solid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Connectors {
    named: BTreeMap<String, Connector>,
}

impl Connectors {
    /// Creates an empty connector map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the connector registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::MissingConnector`] if no such connector exists.
    pub fn get(&self, name: &str) -> Result<&Connector> {
        self.named
            .get(name)
            .ok_or_else(|| OperationError::MissingConnector(name.to_owned()).into())
    }

    /// Returns `true` if a connector is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }

    /// Registers `connector` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, connector: Connector) {
        self.named.insert(name.into(), connector);
    }

    /// Registers `connector` under `name` only if the name is still free.
    ///
    /// Returns the connector stored under `name` afterwards.
    pub fn record(&mut self, name: &str, connector: Connector) -> &Connector {
        self.named.entry(name.to_owned()).or_insert(connector)
    }

    /// Iterates over `(name, connector)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Connector)> {
        self.named.iter().map(|(name, c)| (name.as_str(), c))
    }
}

impl Transformable for Connectors {
    fn transformed(&self, matrix: &Matrix4) -> Self {
        Self {
            named: self
                .named
                .iter()
                .map(|(name, c)| (name.clone(), c.transformed(matrix)))
                .collect(),
        }
    }
}
