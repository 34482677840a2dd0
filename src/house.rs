//! Whole-house generation
//!
//! Runs layout generation and every enabled mesh builder for one parameter
//! set. `HouseGenerator` keeps its mesh buffers between runs so repeated
//! rebuilds refill the same allocations.

use crate::layout::{generate_layout, HouseLayout};
use crate::mesh::{
    build_interior_walls_into, build_rooms_into, build_shell_into, MeshBuffers, MeshStats,
    RoomShellStyle, ShellSpec,
};
use crate::params::HouseParams;

/// Mesh output of one generation run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HouseMeshes {
    /// Floor slab and exterior walls
    pub shell: MeshBuffers,
    pub interior_walls: MeshBuffers,
    /// Per-room shells; empty unless room meshes are enabled
    pub rooms: MeshBuffers,
}

impl HouseMeshes {
    pub fn stats(&self) -> [(&'static str, MeshStats); 3] {
        [
            ("shell", MeshStats::of(&self.shell)),
            ("interior walls", MeshStats::of(&self.interior_walls)),
            ("rooms", MeshStats::of(&self.rooms)),
        ]
    }
}

/// A generated house: floor plan plus meshes
#[derive(Clone, Debug, PartialEq)]
pub struct House {
    pub layout: HouseLayout,
    pub meshes: HouseMeshes,
}

/// Generator that owns reusable mesh buffers.
///
/// One build at a time per generator; `generate` takes `&mut self`.
#[derive(Debug, Default)]
pub struct HouseGenerator {
    meshes: HouseMeshes,
}

impl HouseGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Meshes from the last `generate` call
    pub fn meshes(&self) -> &HouseMeshes {
        &self.meshes
    }

    /// Generate the layout and rebuild every mesh in place.
    pub fn generate(&mut self, params: &HouseParams) -> HouseLayout {
        let params = params.clamped();
        let layout = generate_layout(&params);

        build_shell_into(&mut self.meshes.shell, &ShellSpec::from_params(&params));

        if params.generate_interior_walls {
            build_interior_walls_into(
                &mut self.meshes.interior_walls,
                &layout.wall_segments,
                params.wall_height,
                params.floor_thickness,
            );
        } else {
            self.meshes.interior_walls.clear();
        }

        if params.generate_room_meshes {
            build_rooms_into(&mut self.meshes.rooms, &layout.rooms, &RoomShellStyle::from(&params));
        } else {
            self.meshes.rooms.clear();
        }

        layout
    }
}

/// Generate a house into fresh buffers.
pub fn generate_house(params: &HouseParams) -> House {
    let mut generator = HouseGenerator::new();
    let layout = generator.generate(params);
    House {
        layout,
        meshes: generator.meshes,
    }
}
