//! # Room Shells
//!
//! Same floor-plus-walls layout as the house shell, built per sampled room
//! around the room's own center.

use super::buffers::MeshBuffers;
use super::shell::{append_enclosure, ShellSpec};
use crate::layout::RoomSpec;

/// Wall and slab settings shared by every room shell
#[derive(Clone, Debug, PartialEq)]
pub struct RoomShellStyle {
    pub wall_height: f32,
    pub wall_thickness: f32,
    pub floor_thickness: f32,
    pub generate_floor: bool,
    pub generate_walls: bool,
}

impl RoomShellStyle {
    fn spec_for(&self, room: &RoomSpec) -> ShellSpec {
        ShellSpec {
            width: room.width,
            length: room.length,
            wall_height: self.wall_height,
            wall_thickness: self.wall_thickness,
            floor_thickness: self.floor_thickness,
            generate_floor: self.generate_floor,
            generate_walls: self.generate_walls,
        }
        .clamped()
    }
}

/// Room shells follow the house shell's dimensions. The house floor and wall
/// toggles do not apply; room meshes always get both.
impl From<&crate::params::HouseParams> for RoomShellStyle {
    fn from(params: &crate::params::HouseParams) -> Self {
        Self {
            wall_height: params.wall_height,
            wall_thickness: params.wall_thickness,
            floor_thickness: params.floor_thickness,
            generate_floor: true,
            generate_walls: true,
        }
    }
}

/// Build a single room shell into fresh buffers.
pub fn build_room(room: &RoomSpec, style: &RoomShellStyle) -> MeshBuffers {
    let mut mesh = MeshBuffers::new();
    build_room_into(&mut mesh, room, style);
    mesh
}

/// Clear `mesh` and fill it with one room shell.
pub fn build_room_into(mesh: &mut MeshBuffers, room: &RoomSpec, style: &RoomShellStyle) {
    build_rooms_into(mesh, std::slice::from_ref(room), style);
}

/// Build every room shell into one fresh buffer set.
pub fn build_rooms(rooms: &[RoomSpec], style: &RoomShellStyle) -> MeshBuffers {
    let mut mesh = MeshBuffers::new();
    build_rooms_into(&mut mesh, rooms, style);
    mesh
}

/// Clear `mesh` and fill it with every room shell, in the order given.
pub fn build_rooms_into(mesh: &mut MeshBuffers, rooms: &[RoomSpec], style: &RoomShellStyle) {
    mesh.clear();
    for room in rooms {
        append_enclosure(mesh, room.center, &style.spec_for(room));
    }
}
