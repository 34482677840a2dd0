//! # Oriented Box
//!
//! Appends a rotated, translated rectangular box to a set of mesh buffers.
//! Every face owns four vertices so normals stay flat; nothing is shared
//! between faces or between boxes.

use glam::{Quat, Vec2, Vec3};

use super::buffers::MeshBuffers;

/// Vertices appended per box
pub const BOX_VERTEX_COUNT: usize = 24;
/// Indices appended per box
pub const BOX_INDEX_COUNT: usize = 36;

/// Local corner `i` has x/y/z set to +half when bit 0/1/2 is set.
const fn corner_sign(i: usize) -> [f32; 3] {
    [
        if i & 1 != 0 { 1.0 } else { -1.0 },
        if i & 2 != 0 { 1.0 } else { -1.0 },
        if i & 4 != 0 { 1.0 } else { -1.0 },
    ]
}

/// Faces as (local normal, corner indices). Corners run counter-clockwise
/// seen from outside, starting bottom-left of the face.
const FACES: [([f32; 3], [usize; 4]); 6] = [
    ([1.0, 0.0, 0.0], [5, 1, 3, 7]),  // +X
    ([-1.0, 0.0, 0.0], [0, 4, 6, 2]), // -X
    ([0.0, 1.0, 0.0], [6, 7, 3, 2]),  // +Y
    ([0.0, -1.0, 0.0], [0, 1, 5, 4]), // -Y
    ([0.0, 0.0, 1.0], [4, 5, 7, 6]),  // +Z
    ([0.0, 0.0, -1.0], [1, 0, 2, 3]), // -Z
];

/// Every face maps the whole unit square regardless of its size
const FACE_UVS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// Appends a box of full extents `size` centered at `center` and rotated by
/// `rotation`.
///
/// Adds exactly 24 vertices, normals and UVs and 36 indices.
///
/// # Panics
///
/// Panics if any component of `size` is not strictly positive. Callers clamp
/// their dimensions before getting here.
pub fn append_box(mesh: &mut MeshBuffers, size: Vec3, center: Vec3, rotation: Quat) {
    let half = size * 0.5;
    assert!(
        half.x > 0.0 && half.y > 0.0 && half.z > 0.0,
        "box half-extents must be positive: {:?}",
        half
    );

    let corners: [Vec3; 8] =
        std::array::from_fn(|i| rotation * (Vec3::from_array(corner_sign(i)) * half) + center);

    for (normal, face) in FACES {
        let base = mesh.vertices.len() as u32;
        let normal = rotation * Vec3::from_array(normal);

        for (corner, uv) in face.iter().zip(FACE_UVS) {
            mesh.vertices.push(corners[*corner]);
            mesh.normals.push(normal);
            mesh.uvs.push(uv);
        }

        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Appends an axis-aligned box.
pub fn append_axis_aligned_box(mesh: &mut MeshBuffers, size: Vec3, center: Vec3) {
    append_box(mesh, size, center, Quat::IDENTITY);
}
