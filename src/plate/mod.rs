//! Assembly of a complete switch plate from two matrices.

pub mod assemble;
pub mod presets;

pub use assemble::{present_switches, rest_on_floor, AssemblePlate};
pub use presets::{ergodox_left_primary, ergodox_left_thumb};

use crate::geometry::{Outline, Part, Solid};
use crate::layout::{DescriptorMatrix, EdgeOffsets, LayoutParams};
use crate::math::Point3;
use crate::operations::creation::SwitchHoleParams;

/// Connector on the primary plate that the primary root is attached to.
pub const PRIMARY_PLATE_CONNECTOR: &str = "primary_plate";
/// Connector on the thumb plate used to tilt the thumb cluster.
pub const THUMB_MATRIX_CONNECTOR: &str = "thumb_matrix";
/// Connector at the top-right corner of the HDMI port cutout.
pub const TOP_RIGHT: &str = "top_right";
/// Connector at the middle of the top edge of the USB port cutout.
pub const TOP_CENTER: &str = "top_center";

/// Dimensions of a two-matrix plate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateParams {
    pub layout: LayoutParams,
    /// Switch cutout; its thickness is also the plate thickness.
    pub switch_hole: SwitchHoleParams,
    /// Clearance of the outer plate edge around boundary switches (mm).
    pub exterior_clearance: f64,
    /// Clearance of the spacer's inner cutout around boundary switches (mm).
    pub interior_clearance: f64,
    /// Edge offsets of the primary exterior hull.
    pub primary_exterior_offsets: EdgeOffsets,
    /// Point, in the thumb root's frame, joined to the anchor switch center.
    pub thumb_anchor: Point3,
    /// Tilt of the thumb cluster about its root (radians).
    pub thumb_rotation: f64,
    pub hdmi_width: f64,
    pub usb_width: f64,
    /// Extra depth of the USB cutout beyond the HDMI cutout (mm).
    pub usb_extra_depth: f64,
}

impl PlateParams {
    /// Thickness of one plate layer.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.switch_hole.thickness
    }

    /// Width of the spacer wall between exterior and interior outlines.
    #[must_use]
    pub fn wall_width(&self) -> f64 {
        self.exterior_clearance - self.interior_clearance
    }
}

impl Default for PlateParams {
    fn default() -> Self {
        let layout = LayoutParams::default();
        Self {
            layout,
            switch_hole: SwitchHoleParams::default(),
            exterior_clearance: 10.0,
            interior_clearance: 3.0,
            primary_exterior_offsets: EdgeOffsets {
                top: 5.0,
                bottom: -25.0,
                ..EdgeOffsets::default()
            },
            thumb_anchor: Point3::new(-4.0, layout.y_spacing + 3.0, 0.0),
            thumb_rotation: (-12.0_f64).to_radians(),
            hdmi_width: 15.4,
            usb_width: 8.1,
            usb_extra_depth: 1.5,
        }
    }
}

/// A resolved matrix together with the solids derived from it.
#[derive(Debug, Clone)]
pub struct MatrixDescriptor {
    pub matrix: DescriptorMatrix,
    /// Outer plate outline.
    pub exterior: Outline,
    /// Inner spacer cutout outline.
    pub interior: Outline,
    /// Extruded exterior outline with its named connectors.
    pub plate: Part,
    /// Extruded interior outline.
    pub cutout: Solid,
    /// Union of the present switches, resting on `z = 0`.
    pub switches: Solid,
}

/// Every intermediate and final solid of a plate assembly.
#[derive(Debug, Clone)]
pub struct PlateAssembly {
    pub primary: MatrixDescriptor,
    pub thumb: MatrixDescriptor,
    /// Union of both plates.
    pub full_plate: Solid,
    /// Double-height frame between plate and case, ports removed.
    pub spacer: Solid,
    pub hdmi_cutout: Solid,
    pub usb_cutout: Solid,
    /// Union of both plates minus every switch.
    pub switch_plate: Solid,
    /// Switch plate stacked on top of the spacer.
    pub combined: Solid,
}
