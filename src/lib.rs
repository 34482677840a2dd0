//! Procedural house generation library
//!
//! Seeded floor-plan layout (BSP partitions, interior walls, rooms) and the
//! box meshes built from it. Re-exports modules for use by binaries and tools.

pub mod error;
pub mod export;
pub mod house;
pub mod layout;
pub mod mesh;
pub mod params;

pub use error::MeshError;
pub use house::{generate_house, House, HouseGenerator, HouseMeshes};
pub use layout::{generate_layout, HouseLayout, Rect, RoomSpec, WallSegment};
pub use mesh::MeshBuffers;
pub use params::{HouseParams, HousePreset};
