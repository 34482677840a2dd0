//! # Interior Walls
//!
//! Turns floor-plan wall segments into wall boxes standing on the floor slab.
//! Each box's local Z axis is turned to follow its segment.

use glam::{Quat, Vec3};

use super::box_mesh::append_box;
use super::buffers::MeshBuffers;
use crate::layout::WallSegment;
use crate::params::{MIN_THICKNESS, MIN_WALL_HEIGHT};

/// Build interior walls into fresh buffers.
pub fn build_interior_walls(
    segments: &[WallSegment],
    wall_height: f32,
    floor_thickness: f32,
) -> MeshBuffers {
    let mut mesh = MeshBuffers::with_box_capacity(segments.len());
    build_interior_walls_into(&mut mesh, segments, wall_height, floor_thickness);
    mesh
}

/// Clear `mesh` and fill it with one box per non-degenerate segment.
pub fn build_interior_walls_into(
    mesh: &mut MeshBuffers,
    segments: &[WallSegment],
    wall_height: f32,
    floor_thickness: f32,
) {
    mesh.clear();

    let wall_height = wall_height.max(MIN_WALL_HEIGHT);
    let floor_thickness = floor_thickness.max(MIN_THICKNESS);
    let wall_y = floor_thickness + wall_height / 2.0;

    for segment in segments {
        if segment.is_degenerate() {
            continue;
        }

        let direction = segment.direction();
        let midpoint = segment.midpoint();
        let size = Vec3::new(
            segment.thickness.max(MIN_THICKNESS),
            wall_height,
            segment.length(),
        );

        append_box(
            mesh,
            size,
            Vec3::new(midpoint.x, wall_y, midpoint.y),
            look_rotation(direction.x, direction.y),
        );
    }
}

/// Rotation about +Y that turns local +Z towards the floor-plane direction
/// `(dx, dz)`.
fn look_rotation(dx: f32, dz: f32) -> Quat {
    Quat::from_rotation_y(dx.atan2(dz))
}
