//! House generation parameters and presets

use std::str::FromStr;

use glam::Vec2;

/// Smallest footprint width/length
pub const MIN_FOOTPRINT: f32 = 1.0;
/// Smallest wall height
pub const MIN_WALL_HEIGHT: f32 = 0.1;
/// Smallest wall, floor and interior-wall thickness
pub const MIN_THICKNESS: f32 = 0.01;
/// Smallest room dimension on either axis
pub const MIN_ROOM_DIMENSION: f32 = 1.0;

/// House size preset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HousePreset {
    /// Small single-space house with few splits
    Cottage,
    /// Medium footprint, a handful of rooms
    #[default]
    Townhouse,
    /// Large footprint with many rooms
    Manor,
}

impl HousePreset {
    pub fn all() -> &'static [Self] {
        &[Self::Cottage, Self::Townhouse, Self::Manor]
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Cottage => "Small footprint, one or two rooms",
            Self::Townhouse => "Medium footprint, four or five rooms",
            Self::Manor => "Large footprint, many rooms",
        }
    }

    /// Parameters for this preset with the given seed
    pub fn params(&self, seed: u64) -> HouseParams {
        let base = HouseParams {
            seed,
            ..HouseParams::default()
        };
        match self {
            Self::Cottage => HouseParams {
                width: 8.0,
                length: 6.0,
                iterations: 1,
                min_room_size: Vec2::new(3.0, 3.0),
                max_room_size: Vec2::new(6.0, 6.0),
                ..base
            },
            Self::Townhouse => base,
            Self::Manor => HouseParams {
                width: 24.0,
                length: 18.0,
                wall_height: 3.5,
                wall_thickness: 0.3,
                iterations: 10,
                min_room_size: Vec2::new(3.5, 3.5),
                max_room_size: Vec2::new(9.0, 9.0),
                ..base
            },
        }
    }
}

impl std::fmt::Display for HousePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cottage => write!(f, "cottage"),
            Self::Townhouse => write!(f, "townhouse"),
            Self::Manor => write!(f, "manor"),
        }
    }
}

impl FromStr for HousePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cottage" => Ok(Self::Cottage),
            "townhouse" => Ok(Self::Townhouse),
            "manor" => Ok(Self::Manor),
            other => Err(format!(
                "unknown preset '{}' (expected one of: cottage, townhouse, manor)",
                other
            )),
        }
    }
}

/// Everything needed to generate one house
#[derive(Clone, Debug, PartialEq)]
pub struct HouseParams {
    // =========================================================================
    // Footprint and shell
    // =========================================================================

    /// Footprint size along X
    pub width: f32,

    /// Footprint size along Z
    pub length: f32,

    /// Height of exterior and interior walls above the floor slab
    pub wall_height: f32,

    /// Exterior wall thickness
    pub wall_thickness: f32,

    /// Floor slab thickness; walls stand on top of it
    pub floor_thickness: f32,

    // =========================================================================
    // Interior layout
    // =========================================================================

    /// Thickness recorded on every interior wall segment
    pub interior_wall_thickness: f32,

    /// Split budget for the partitioner (may end early)
    pub iterations: usize,

    /// Minimum room size (x = width, y = length)
    pub min_room_size: Vec2,

    /// Maximum room size (x = width, y = length)
    pub max_room_size: Vec2,

    /// Seed for the layout generator
    pub seed: u64,

    // =========================================================================
    // Feature toggles
    // =========================================================================

    pub generate_floor: bool,
    pub generate_walls: bool,
    pub generate_interior_walls: bool,
    /// Build a floor + four walls shell per sampled room
    pub generate_room_meshes: bool,
}

impl Default for HouseParams {
    fn default() -> Self {
        Self {
            width: 12.0,
            length: 12.0,
            wall_height: 3.0,
            wall_thickness: 0.2,
            floor_thickness: 0.2,
            interior_wall_thickness: 0.1,
            iterations: 4,
            min_room_size: Vec2::new(3.0, 3.0),
            max_room_size: Vec2::new(8.0, 8.0),
            seed: 12345,
            generate_floor: true,
            generate_walls: true,
            generate_interior_walls: true,
            generate_room_meshes: false,
        }
    }
}

impl HouseParams {
    /// Copy of these params with every dimension clamped to a valid range.
    ///
    /// Room sizes are clamped to at least one unit, max raised to min, both
    /// capped at the footprint, then min capped at max.
    pub fn clamped(&self) -> Self {
        let width = self.width.max(MIN_FOOTPRINT);
        let length = self.length.max(MIN_FOOTPRINT);
        let footprint = Vec2::new(width, length);

        let (min_room_size, max_room_size) =
            clamp_room_sizes(self.min_room_size, self.max_room_size, footprint);

        Self {
            width,
            length,
            wall_height: self.wall_height.max(MIN_WALL_HEIGHT),
            wall_thickness: self.wall_thickness.max(MIN_THICKNESS),
            floor_thickness: self.floor_thickness.max(MIN_THICKNESS),
            interior_wall_thickness: self.interior_wall_thickness.max(MIN_THICKNESS),
            min_room_size,
            max_room_size,
            ..self.clone()
        }
    }

    /// Footprint size as (width, length)
    pub fn footprint_size(&self) -> Vec2 {
        Vec2::new(self.width, self.length)
    }
}

/// Clamp a min/max room size pair against a footprint.
pub fn clamp_room_sizes(min: Vec2, max: Vec2, footprint: Vec2) -> (Vec2, Vec2) {
    let min = min.max(Vec2::splat(MIN_ROOM_DIMENSION));
    let max = max.max(Vec2::splat(MIN_ROOM_DIMENSION)).max(min);
    let min = min.min(footprint);
    let max = max.min(footprint);
    (min.min(max), max)
}
