use tracing::{debug, instrument};

use crate::error::{OperationError, Result};
use crate::geometry::{compose, Connector, Outline, Part, Solid, Transformable, CENTER};
use crate::layout::{
    BuildMatrix, DescriptorMatrix, GridPosition, HullParams, MatrixLayout, Perimeter,
    ResolveConnectors,
};
use crate::math::{Point2, Point3, Vector3};
use crate::operations::boolean::{Subtract, Union, UnionAll};
use crate::operations::creation::{MakeBox, MakeSwitchHole};
use crate::operations::query::{bounds_center, BoundingBox};
use crate::operations::shaping::Extrude;
use crate::operations::transform::{ConnectTo, Scale, Translate};

use super::{
    MatrixDescriptor, PlateAssembly, PlateParams, PRIMARY_PLATE_CONNECTOR, THUMB_MATRIX_CONNECTOR,
    TOP_CENTER, TOP_RIGHT,
};

/// Builds a plate from a primary matrix and a thumb matrix.
///
/// The thumb root hangs off the primary switch at the end of the
/// second-to-last row. Each matrix gets an exterior and an interior hull;
/// the primary ones have their maximum-X corner squared off. The spacer
/// is the double-height frame between the two hulls, with HDMI and USB
/// port cutouts placed against the primary hull. The switch plate is the
/// union of both exterior plates with every present switch removed.
pub struct AssemblePlate<'a> {
    primary: &'a MatrixLayout,
    thumb: &'a MatrixLayout,
    params: PlateParams,
}

impl<'a> AssemblePlate<'a> {
    /// Creates a new `AssemblePlate` operation with default dimensions.
    #[must_use]
    pub fn new(primary: &'a MatrixLayout, thumb: &'a MatrixLayout) -> Self {
        Self {
            primary,
            thumb,
            params: PlateParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: PlateParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the assembly.
    ///
    /// # Errors
    ///
    /// Returns an error if a layout cannot be built, resolved or enclosed,
    /// if the primary matrix has fewer than two rows or no cell at (0, 1),
    /// or if a kernel operation rejects its input.
    #[instrument(skip_all)]
    pub fn execute(&self) -> Result<PlateAssembly> {
        let p = &self.params;
        let switch = MakeSwitchHole::new(p.switch_hole).execute()?;

        let primary = BuildMatrix::new(self.primary, &switch)
            .with_params(p.layout)
            .execute()?;
        let primary = ResolveConnectors::new(&primary).centered(true).execute()?;

        let mut thumb = BuildMatrix::new(self.thumb, &switch)
            .with_params(p.layout)
            .execute()?;
        let anchor_row = primary.row_count().checked_sub(2).ok_or_else(|| {
            OperationError::InvalidInput("primary matrix needs at least two rows".into())
        })?;
        let anchor_col = primary.row_len(anchor_row).saturating_sub(1);
        let anchor = primary.get(anchor_row, anchor_col)?.part().clone();
        thumb.attach_external(
            GridPosition::new(0, 0),
            anchor,
            Connector::upright(p.thumb_anchor),
            None,
        )?;
        let thumb = ResolveConnectors::new(&thumb).centered(true).execute()?;
        debug!(anchor_row, anchor_col, "attached thumb matrix");

        let exterior = HullParams {
            clearance: p.exterior_clearance,
            offsets: p.primary_exterior_offsets,
            straighten_max_x: true,
        };
        let interior = HullParams {
            clearance: p.interior_clearance,
            straighten_max_x: true,
            ..HullParams::default()
        };
        let (primary_exterior, primary_plate) = extruded_hull(&primary, exterior, p.thickness())?;
        let (primary_interior, primary_cutout) = extruded_hull(&primary, interior, p.thickness())?;
        let (thumb_exterior, thumb_plate) = extruded_hull(
            &thumb,
            HullParams::with_clearance(p.exterior_clearance),
            p.thickness(),
        )?;
        let (thumb_interior, thumb_cutout) = extruded_hull(
            &thumb,
            HullParams::with_clearance(p.interior_clearance),
            p.thickness(),
        )?;

        // Re-root the primary matrix on its own plate at the root's current
        // center. Source and target coincide, so no switch moves.
        let root_center = *primary.get(0, 0)?.part().connector(CENTER)?.origin();
        let plate_connector = Connector::upright(root_center);
        let primary_plate =
            Part::new(primary_plate).with_connector(PRIMARY_PLATE_CONNECTOR, plate_connector);
        let mut primary = primary;
        primary.attach_external(
            GridPosition::new(0, 0),
            primary_plate.clone(),
            plate_connector,
            Some(PRIMARY_PLATE_CONNECTOR),
        )?;
        let primary = ResolveConnectors::new(&primary).centered(true).execute()?;

        let primary = MatrixDescriptor {
            switches: present_switches(&primary)?,
            matrix: primary,
            exterior: primary_exterior,
            interior: primary_interior,
            plate: primary_plate,
            cutout: primary_cutout,
        };
        let thumb = tilt_thumb(
            MatrixDescriptor {
                switches: present_switches(&thumb)?,
                matrix: thumb,
                exterior: thumb_exterior,
                interior: thumb_interior,
                plate: Part::new(thumb_plate),
                cutout: thumb_cutout,
            },
            p.thumb_rotation,
        )?;

        let full_plate = Union::new(primary.plate.solid(), thumb.plate.solid()).execute();
        let full_cutout = Union::new(&primary.cutout, &thumb.cutout).execute();
        let spacer = Subtract::new(&full_plate, &full_cutout).execute();
        let spacer = rest_on_floor(&Scale::new(&spacer, Vector3::new(1.0, 1.0, 2.0)).execute()?)?;
        let spacer_box = BoundingBox::new(&spacer).execute()?;
        let spacer_height = spacer_box.size().z;

        let hdmi_cutout = hdmi_cutout(&primary, p, spacer_height)?;
        let usb_cutout = usb_cutout(&primary, p, spacer_height)?;
        let spacer = Subtract::new(
            &Subtract::new(&spacer, &hdmi_cutout).execute(),
            &usb_cutout,
        )
        .execute();

        let switches = Union::new(&primary.switches, &thumb.switches).execute();
        let switch_plate = Subtract::new(&full_plate, &switches).execute();
        let lifted =
            Translate::new(&switch_plate, Vector3::new(0.0, 0.0, spacer_box.max.z)).execute();
        let combined = Union::new(&lifted, &spacer).execute();
        debug!(
            spacer_height,
            prisms = combined.prism_count(),
            "assembled switch plate"
        );

        Ok(PlateAssembly {
            primary,
            thumb,
            full_plate,
            spacer,
            hdmi_cutout,
            usb_cutout,
            switch_plate,
            combined,
        })
    }
}

/// Union of the present switches of `matrix`, moved to rest on `z = 0`.
///
/// # Errors
///
/// Returns an error if the matrix holds no present switch.
pub fn present_switches(matrix: &DescriptorMatrix) -> Result<Solid> {
    let union = UnionAll::new(matrix.present().map(|d| d.part().solid())).execute();
    rest_on_floor(&union)
}

/// Moves a solid along Z so that its lowest point sits on `z = 0`.
///
/// # Errors
///
/// Returns an error if the solid is empty.
pub fn rest_on_floor(solid: &Solid) -> Result<Solid> {
    let min_z = BoundingBox::new(solid).execute()?.min.z;
    Ok(Translate::new(solid, Vector3::new(0.0, 0.0, -min_z)).execute())
}

/// Perimeter hull of `matrix` and its extrusion.
fn extruded_hull(
    matrix: &DescriptorMatrix,
    params: HullParams,
    thickness: f64,
) -> Result<(Outline, Solid)> {
    let outline = Perimeter::new(matrix, params).execute()?.outline;
    let solid = Extrude::new(&outline, thickness).execute()?;
    Ok((outline, solid))
}

/// Turns the thumb plate, cutout and switches about the thumb root.
///
/// All three share one transform, computed from the thumb root's center
/// connector before the plate is moved.
fn tilt_thumb(thumb: MatrixDescriptor, rotation: f64) -> Result<MatrixDescriptor> {
    let root = *thumb.matrix.get(0, 0)?.part().connector(CENTER)?;
    let pivot = Connector::upright(*root.origin());
    let transform = compose(&pivot, &root, rotation)?.to_homogeneous();
    debug!(
        pivot = ?[pivot.origin().x, pivot.origin().y],
        rotation,
        "tilting thumb matrix"
    );

    let plate = thumb
        .plate
        .with_connector(THUMB_MATRIX_CONNECTOR, pivot)
        .transformed(&transform);
    Ok(MatrixDescriptor {
        cutout: thumb.cutout.transformed(&transform),
        switches: thumb.switches.transformed(&transform),
        plate,
        ..thumb
    })
}

/// HDMI port cutout, its top-right corner flush with the primary plate's
/// top edge, one wall width in from the right.
fn hdmi_cutout(primary: &MatrixDescriptor, p: &PlateParams, height: f64) -> Result<Solid> {
    let depth = p.wall_width() + p.primary_exterior_offsets.top;
    let cutout = port_box(p.hdmi_width, depth, height)?;
    let corner = BoundingBox::new(&cutout).execute()?.max;
    let source = Connector::upright(Point3::new(corner.x, corner.y, 0.0));

    let plate = BoundingBox::new(primary.plate.solid()).execute()?;
    let target = Connector::upright(Point3::new(
        plate.max.x - p.wall_width(),
        plate.max.y,
        0.0,
    ));
    let part = Part::new(cutout).with_connector(TOP_RIGHT, source);
    let placed = ConnectTo::new(&part, *part.connector(TOP_RIGHT)?, target).execute()?;
    Ok(placed.into_parts().0)
}

/// USB port cutout, centered on the primary hull side that runs into the
/// top of its minimum-X side and turned to follow that side.
fn usb_cutout(primary: &MatrixDescriptor, p: &PlateParams, height: f64) -> Result<Solid> {
    let depth = p.wall_width() + p.primary_exterior_offsets.top + p.usb_extra_depth;
    let cutout = port_box(p.usb_width, depth, height)?;
    let top = BoundingBox::new(&cutout).execute()?.max.y;
    let source = Connector::upright(Point3::new(0.0, top, 0.0));

    let hull = &primary.exterior;
    let left = hull.side_on_min_x().ok_or_else(|| {
        OperationError::Failed("primary hull has no side on its minimum-X line".into())
    })?;
    let side = hull.side((left + hull.len() - 1) % hull.len());
    let reference = bounds_center(primary.matrix.get(0, 1)?.part().solid())?;
    let at = side.closest_point_on_line(&Point2::new(reference.x, reference.y));
    let target = Connector::upright(Point3::new(at.x, at.y, 0.0));

    let part = Part::new(cutout).with_connector(TOP_CENTER, source);
    let placed = ConnectTo::new(&part, *part.connector(TOP_CENTER)?, target)
        .rotated(side.slope_angle())
        .execute()?;
    Ok(placed.into_parts().0)
}

/// Box centered on the Z axis, resting on `z = 0`.
fn port_box(width: f64, depth: f64, height: f64) -> Result<Solid> {
    let cutout = MakeBox::new(Vector3::new(width / 2.0, depth / 2.0, height / 2.0)).execute()?;
    rest_on_floor(&cutout)
}
