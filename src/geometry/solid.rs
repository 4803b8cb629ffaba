use std::sync::Arc;

use crate::math::{Matrix4, Point2, Point3};

use super::Transformable;

/// An immutable constructive-solid-geometry expression.
///
/// Leaves are right prisms; interior nodes are unions and differences.
/// Children are shared behind `Arc`, so cloning a solid is cheap and every
/// operation produces a new tree instead of editing an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    node: Arc<SolidNode>,
}

/// The node kinds of a [`Solid`] tree.
#[derive(Debug, PartialEq)]
pub enum SolidNode {
    /// Contains no points.
    Empty,
    /// A single extruded profile.
    Prism(Prism),
    /// Points inside any child.
    Union(Vec<Solid>),
    /// Points inside the first solid and not inside the second.
    Difference(Solid, Solid),
}

/// A 2D profile extruded from `z = 0` to `z = height` in its local frame,
/// then carried into place by `placement`.
#[derive(Debug, Clone, PartialEq)]
pub struct Prism {
    profile: Arc<[Point2]>,
    height: f64,
    placement: Matrix4,
}

impl Prism {
    /// Creates a prism from a counter-clockwise profile.
    #[must_use]
    pub(crate) fn new(profile: Vec<Point2>, height: f64, placement: Matrix4) -> Self {
        Self {
            profile: profile.into(),
            height,
            placement,
        }
    }

    /// Returns the profile in the prism's local frame.
    #[must_use]
    pub fn profile(&self) -> &[Point2] {
        &self.profile
    }

    /// Returns the extrusion height in the local frame.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the local-to-world placement.
    #[must_use]
    pub fn placement(&self) -> &Matrix4 {
        &self.placement
    }

    /// World-space corners of the prism (bottom ring then top ring).
    pub fn corners(&self) -> impl Iterator<Item = Point3> + '_ {
        [0.0, self.height].into_iter().flat_map(move |z| {
            self.profile
                .iter()
                .map(move |p| self.placement.transform_point(&Point3::new(p.x, p.y, z)))
        })
    }
}

impl Solid {
    fn from_node(node: SolidNode) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// The empty solid.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_node(SolidNode::Empty)
    }

    pub(crate) fn prism(prism: Prism) -> Self {
        Self::from_node(SolidNode::Prism(prism))
    }

    pub(crate) fn union_of(children: Vec<Solid>) -> Self {
        Self::from_node(SolidNode::Union(children))
    }

    pub(crate) fn difference_of(a: Solid, b: Solid) -> Self {
        Self::from_node(SolidNode::Difference(a, b))
    }

    /// Returns the root node of the expression.
    #[must_use]
    pub fn node(&self) -> &SolidNode {
        &self.node
    }

    /// Returns `true` for the empty solid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(*self.node, SolidNode::Empty)
    }

    /// Number of prism leaves in the expression.
    #[must_use]
    pub fn prism_count(&self) -> usize {
        match &*self.node {
            SolidNode::Empty => 0,
            SolidNode::Prism(_) => 1,
            SolidNode::Union(children) => children.iter().map(Solid::prism_count).sum(),
            SolidNode::Difference(a, b) => a.prism_count() + b.prism_count(),
        }
    }
}

impl Transformable for Solid {
    fn transformed(&self, matrix: &Matrix4) -> Self {
        match &*self.node {
            SolidNode::Empty => self.clone(),
            SolidNode::Prism(prism) => Self::prism(Prism {
                profile: Arc::clone(&prism.profile),
                height: prism.height,
                placement: matrix * prism.placement,
            }),
            SolidNode::Union(children) => {
                Self::union_of(children.iter().map(|c| c.transformed(matrix)).collect())
            }
            SolidNode::Difference(a, b) => {
                Self::difference_of(a.transformed(matrix), b.transformed(matrix))
            }
        }
    }
}
