//! Layout types
//!
//! Plain geometric records produced by the splitter and the room sampler.
//! All 2D coordinates live in the floor plane: `x` maps to world X and `y`
//! maps to world Z.

use glam::Vec2;
use serde::Serialize;

/// Tolerance used for containment tests and degenerate-segment detection
pub const GEOMETRY_EPSILON: f32 = 1e-4;

/// Axis-aligned rectangle (min corner + size)
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Build a rect of the given size centered on `center`
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Width divided by height
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.x - GEOMETRY_EPSILON
            && p.y >= self.y - GEOMETRY_EPSILON
            && p.x <= self.x + self.width + GEOMETRY_EPSILON
            && p.y <= self.y + self.height + GEOMETRY_EPSILON
    }

    /// True if `other` lies fully inside this rect (edges may touch)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains_point(other.min()) && self.contains_point(other.max())
    }
}

/// Which wall of a room an anchor refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum WallSide {
    /// +Y edge (world +Z)
    North,
    /// -Y edge (world -Z)
    South,
    /// +X edge
    East,
    /// -X edge
    West,
}

impl WallSide {
    pub fn all() -> &'static [Self] {
        &[Self::North, Self::South, Self::East, Self::West]
    }

    /// Unit direction pointing out of the room through this wall
    pub fn outward(&self) -> Vec2 {
        match self {
            WallSide::North => Vec2::Y,
            WallSide::South => Vec2::NEG_Y,
            WallSide::East => Vec2::X,
            WallSide::West => Vec2::NEG_X,
        }
    }
}

/// A room sampled inside one leaf partition.
///
/// `bounds` is derived from the sampled size and center; it may be smaller
/// than the source leaf and sit anywhere inside it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RoomSpec {
    pub center: Vec2,
    pub width: f32,
    pub length: f32,
    pub bounds: Rect,
    /// Index of the leaf partition this room was sampled from
    pub partition_index: usize,
}

impl RoomSpec {
    pub fn new(center: Vec2, width: f32, length: f32, partition_index: usize) -> Self {
        Self {
            center,
            width,
            length,
            bounds: Rect::from_center(center, width, length),
            partition_index,
        }
    }

    /// Anchor point against one of the room's walls.
    ///
    /// Returns the midpoint of that wall moved `inset` towards the room
    /// center, and the unit direction facing into the room.
    pub fn wall_anchor(&self, side: WallSide, inset: f32) -> (Vec2, Vec2) {
        let outward = side.outward();
        let half = Vec2::new(self.bounds.width / 2.0, self.bounds.height / 2.0);
        let center = self.bounds.center();
        let reach = (outward * half).length();
        let inset = inset.clamp(0.0, reach);
        (center + outward * (reach - inset), -outward)
    }
}

/// A line in the floor plane along which an interior wall is built
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WallSegment {
    pub start: Vec2,
    pub end: Vec2,
    pub thickness: f32,
}

impl WallSegment {
    pub fn new(start: Vec2, end: Vec2, thickness: f32) -> Self {
        Self { start, end, thickness }
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.direction().length()
    }

    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }

    /// Zero-length segments carry no wall and are skipped by mesh builders
    pub fn is_degenerate(&self) -> bool {
        self.length() <= GEOMETRY_EPSILON
    }
}
