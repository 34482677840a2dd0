//! # House Shell
//!
//! Floor slab plus four exterior walls. Walls stand on the slab and their
//! lengths run `2 * wall_thickness` past the footprint so neighbouring walls
//! close the corners.

use glam::{Vec2, Vec3};

use super::box_mesh::append_axis_aligned_box;
use super::buffers::MeshBuffers;
use crate::params::{HouseParams, MIN_FOOTPRINT, MIN_THICKNESS, MIN_WALL_HEIGHT};

/// Dimensions and toggles for one floor-plus-walls enclosure
#[derive(Clone, Debug, PartialEq)]
pub struct ShellSpec {
    pub width: f32,
    pub length: f32,
    pub wall_height: f32,
    pub wall_thickness: f32,
    pub floor_thickness: f32,
    pub generate_floor: bool,
    pub generate_walls: bool,
}

impl ShellSpec {
    pub fn from_params(params: &HouseParams) -> Self {
        Self {
            width: params.width,
            length: params.length,
            wall_height: params.wall_height,
            wall_thickness: params.wall_thickness,
            floor_thickness: params.floor_thickness,
            generate_floor: params.generate_floor,
            generate_walls: params.generate_walls,
        }
    }

    /// Copy with every dimension raised to its minimum
    pub fn clamped(&self) -> Self {
        Self {
            width: self.width.max(MIN_FOOTPRINT),
            length: self.length.max(MIN_FOOTPRINT),
            wall_height: self.wall_height.max(MIN_WALL_HEIGHT),
            wall_thickness: self.wall_thickness.max(MIN_THICKNESS),
            floor_thickness: self.floor_thickness.max(MIN_THICKNESS),
            ..self.clone()
        }
    }

    /// Number of boxes this spec produces
    pub fn box_count(&self) -> usize {
        usize::from(self.generate_floor) + if self.generate_walls { 4 } else { 0 }
    }
}

/// Build the house shell into fresh buffers.
pub fn build_shell(spec: &ShellSpec) -> MeshBuffers {
    let mut mesh = MeshBuffers::new();
    build_shell_into(&mut mesh, spec);
    mesh
}

/// Clear `mesh` and fill it with the house shell centered on the origin.
pub fn build_shell_into(mesh: &mut MeshBuffers, spec: &ShellSpec) {
    mesh.clear();
    append_enclosure(mesh, Vec2::ZERO, &spec.clamped());
}

/// Append a floor slab and/or four walls for a `spec` centered on `center`
/// (floor-plane coordinates). `spec` must already be clamped.
pub(crate) fn append_enclosure(mesh: &mut MeshBuffers, center: Vec2, spec: &ShellSpec) {
    let origin = Vec3::new(center.x, 0.0, center.y);

    if spec.generate_floor {
        append_axis_aligned_box(
            mesh,
            Vec3::new(spec.width, spec.floor_thickness, spec.length),
            origin + Vec3::new(0.0, spec.floor_thickness / 2.0, 0.0),
        );
    }

    if !spec.generate_walls {
        return;
    }

    let t = spec.wall_thickness;
    let wall_y = spec.floor_thickness + spec.wall_height / 2.0;
    let span_x = spec.width + 2.0 * t;
    let span_z = spec.length + 2.0 * t;
    let offset_z = spec.length / 2.0 + t / 2.0;
    let offset_x = spec.width / 2.0 + t / 2.0;

    let walls = [
        // Front (+Z) and back (-Z) run along the width
        (Vec3::new(span_x, spec.wall_height, t), Vec3::new(0.0, wall_y, offset_z)),
        (Vec3::new(span_x, spec.wall_height, t), Vec3::new(0.0, wall_y, -offset_z)),
        // Right (+X) and left (-X) run along the length
        (Vec3::new(t, spec.wall_height, span_z), Vec3::new(offset_x, wall_y, 0.0)),
        (Vec3::new(t, spec.wall_height, span_z), Vec3::new(-offset_x, wall_y, 0.0)),
    ];

    for (size, local_center) in walls {
        append_axis_aligned_box(mesh, size, origin + local_center);
    }
}
