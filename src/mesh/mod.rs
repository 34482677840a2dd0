//! Mesh synthesis
//!
//! Every mesh in a house is made of oriented boxes appended into shared
//! buffers:
//! - `box_mesh`: the box appender itself
//! - `shell`: floor slab and exterior walls
//! - `interior`: walls along floor-plan wall segments
//! - `rooms`: per-room floor and walls, single or batched

pub mod box_mesh;
pub mod buffers;
pub mod interior;
pub mod rooms;
pub mod shell;

pub use box_mesh::{append_axis_aligned_box, append_box, BOX_INDEX_COUNT, BOX_VERTEX_COUNT};
pub use buffers::{GpuVertex, MeshBuffers};
pub use interior::{build_interior_walls, build_interior_walls_into};
pub use rooms::{build_room, build_room_into, build_rooms, build_rooms_into, RoomShellStyle};
pub use shell::{build_shell, build_shell_into, ShellSpec};

/// Summary numbers for a mesh
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshStats {
    pub vertices: usize,
    pub triangles: usize,
    pub boxes: usize,
}

impl MeshStats {
    pub fn of(mesh: &MeshBuffers) -> Self {
        Self {
            vertices: mesh.vertex_count(),
            triangles: mesh.triangle_count(),
            boxes: mesh.vertex_count() / BOX_VERTEX_COUNT,
        }
    }
}

impl std::fmt::Display for MeshStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} boxes, {} vertices, {} triangles",
            self.boxes, self.vertices, self.triangles
        )
    }
}
