//! Binary Space Partitioning (BSP) of a house footprint
//!
//! Repeatedly picks a splittable partition at random and cuts it in two,
//! recording an interior wall segment along every cut. Partitions are kept
//! in a flat list: the cut rect is replaced in place by its first half and
//! the second half is appended.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::types::{Rect, WallSegment};
use crate::params::{clamp_room_sizes, MIN_FOOTPRINT, MIN_THICKNESS};

/// Width/height ratio at or above which a rect is always cut across its width
const FORCE_VERTICAL_RATIO: f32 = 1.25;
/// Width/height ratio at or below which a rect is always cut across its height
const FORCE_HORIZONTAL_RATIO: f32 = 0.8;

/// Settings for one partitioning run
#[derive(Clone, Debug, PartialEq)]
pub struct SplitConfig {
    pub iterations: usize,
    pub min_room_size: Vec2,
    pub max_room_size: Vec2,
    /// Thickness tagged on every recorded wall segment
    pub interior_wall_thickness: f32,
}

/// Direction of a cut
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitAxis {
    /// Cut across the width: a line of constant x
    Vertical,
    /// Cut across the height: a line of constant y
    Horizontal,
}

/// Result of partitioning a footprint
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partition {
    /// Leaf rects in insertion order
    pub partitions: Vec<Rect>,
    /// One segment per successful cut, in cut order
    pub wall_segments: Vec<WallSegment>,
}

impl Partition {
    pub fn total_area(&self) -> f32 {
        self.partitions.iter().map(Rect::area).sum()
    }
}

/// Partition a footprint with a fresh generator seeded from `seed`.
///
/// The generator is returned so the same stream can continue into room
/// sampling.
pub fn split(footprint: Rect, config: &SplitConfig, seed: u64) -> (Partition, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let partition = split_footprint(footprint, config, &mut rng);
    (partition, rng)
}

/// Partition a footprint, drawing from `rng`.
///
/// Stops early once no partition is splittable. An iteration whose chosen
/// axis has no valid cut range is consumed without producing a cut.
pub fn split_footprint(footprint: Rect, config: &SplitConfig, rng: &mut ChaCha8Rng) -> Partition {
    let footprint = Rect {
        width: footprint.width.max(MIN_FOOTPRINT),
        height: footprint.height.max(MIN_FOOTPRINT),
        ..footprint
    };
    let (min_size, _) = clamp_room_sizes(
        config.min_room_size,
        config.max_room_size,
        Vec2::new(footprint.width, footprint.height),
    );
    let thickness = config.interior_wall_thickness.max(MIN_THICKNESS);

    let mut partitions = vec![footprint];
    let mut wall_segments = Vec::new();

    for _ in 0..config.iterations {
        let candidates: Vec<usize> = partitions
            .iter()
            .enumerate()
            .filter(|(_, rect)| is_splittable(rect, min_size))
            .map(|(i, _)| i)
            .collect();

        if candidates.is_empty() {
            break;
        }

        let index = candidates[rng.gen_range(0..candidates.len())];
        let rect = partitions[index];
        let axis = choose_axis(&rect, rng);

        let (lo, hi) = match axis {
            SplitAxis::Vertical => (min_size.x, rect.width - min_size.x),
            SplitAxis::Horizontal => (min_size.y, rect.height - min_size.y),
        };
        if lo >= hi {
            continue;
        }

        let offset = rng.gen_range(lo..=hi);
        let (first, second, wall) = cut_rect(&rect, axis, offset, thickness);

        partitions[index] = first;
        partitions.push(second);
        wall_segments.push(wall);
    }

    Partition {
        partitions,
        wall_segments,
    }
}

/// A rect can be split if either side fits two minimum rooms
pub fn is_splittable(rect: &Rect, min_size: Vec2) -> bool {
    rect.width >= min_size.x * 2.0 || rect.height >= min_size.y * 2.0
}

/// Pick the cut direction, preferring to shorten the longer side
fn choose_axis(rect: &Rect, rng: &mut ChaCha8Rng) -> SplitAxis {
    let ratio = rect.aspect_ratio();
    if ratio >= FORCE_VERTICAL_RATIO {
        SplitAxis::Vertical
    } else if ratio <= FORCE_HORIZONTAL_RATIO {
        SplitAxis::Horizontal
    } else if rng.gen_bool(0.5) {
        SplitAxis::Vertical
    } else {
        SplitAxis::Horizontal
    }
}

/// Cut `rect` at `offset` from its min corner along `axis`.
///
/// The wall segment spans the whole rect at the cut line.
fn cut_rect(
    rect: &Rect,
    axis: SplitAxis,
    offset: f32,
    thickness: f32,
) -> (Rect, Rect, WallSegment) {
    match axis {
        SplitAxis::Vertical => {
            let cut_x = rect.x + offset;
            let first = Rect::new(rect.x, rect.y, offset, rect.height);
            let second = Rect::new(cut_x, rect.y, rect.width - offset, rect.height);
            let wall = WallSegment::new(
                Vec2::new(cut_x, rect.y),
                Vec2::new(cut_x, rect.y + rect.height),
                thickness,
            );
            (first, second, wall)
        }
        SplitAxis::Horizontal => {
            let cut_y = rect.y + offset;
            let first = Rect::new(rect.x, rect.y, rect.width, offset);
            let second = Rect::new(rect.x, cut_y, rect.width, rect.height - offset);
            let wall = WallSegment::new(
                Vec2::new(rect.x, cut_y),
                Vec2::new(rect.x + rect.width, cut_y),
                thickness,
            );
            (first, second, wall)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(iterations: usize, min: f32, max: f32) -> SplitConfig {
        SplitConfig {
            iterations,
            min_room_size: Vec2::splat(min),
            max_room_size: Vec2::splat(max),
            interior_wall_thickness: 0.1,
        }
    }

    fn footprint_12() -> Rect {
        Rect::new(-6.0, -6.0, 12.0, 12.0)
    }

    #[test]
    fn test_zero_iterations_keeps_footprint() {
        let (result, _) = split(footprint_12(), &config(0, 3.0, 8.0), 12345);
        assert_eq!(result.partitions, vec![footprint_12()]);
        assert!(result.wall_segments.is_empty());
    }

    fn rect_bits(rect: &Rect) -> [u32; 4] {
        [
            rect.x.to_bits(),
            rect.y.to_bits(),
            rect.width.to_bits(),
            rect.height.to_bits(),
        ]
    }

    fn wall_bits(wall: &WallSegment) -> [u32; 4] {
        [
            wall.start.x.to_bits(),
            wall.start.y.to_bits(),
            wall.end.x.to_bits(),
            wall.end.y.to_bits(),
        ]
    }

    #[test]
    fn test_reference_scenario_golden() {
        // 12x12 footprint, rooms 3..8, 4 iterations, seed 12345
        let (result, _) = split(footprint_12(), &config(4, 3.0, 8.0), 12345);

        let expected_partitions: [[u32; 4]; 5] = [
            // (-6, -6, 5.4566865, 5.0005264)
            [0xc0c0_0000, 0xc0c0_0000, 0x40ae_9d2d, 0x40a0_0450],
            // (-0.5433135, -6, 6.5433135, 6.9651117)
            [0xbf0b_1698, 0xc0c0_0000, 0x40d1_62d3, 0x40de_e232],
            // (-6, -0.9994736, 5.4566865, 3.7142181)
            [0xc0c0_0000, 0xbf7f_dd80, 0x40ae_9d2d, 0x406d_b5c0],
            // (-0.5433135, 0.96511173, 6.5433135, 5.0348883)
            [0xbf0b_1698, 0x3f77_1190, 0x40d1_62d3, 0x40a1_1dce],
            // (-6, 2.7147446, 5.4566865, 3.2852554)
            [0xc0c0_0000, 0x402d_be60, 0x40ae_9d2d, 0x4052_41a0],
        ];
        let expected_walls: [[u32; 4]; 4] = [
            // x = -0.5433135 from y = -6 to y = 6
            [0xbf0b_1698, 0xc0c0_0000, 0xbf0b_1698, 0x40c0_0000],
            // y = -0.9994736 across the left half
            [0xc0c0_0000, 0xbf7f_dd80, 0xbf0b_1698, 0xbf7f_dd80],
            // y = 0.96511173 across the right half
            [0xbf0b_1698, 0x3f77_1190, 0x40c0_0000, 0x3f77_1190],
            // y = 2.7147446 across the upper left
            [0xc0c0_0000, 0x402d_be60, 0xbf0b_1698, 0x402d_be60],
        ];

        let partitions: Vec<[u32; 4]> = result.partitions.iter().map(rect_bits).collect();
        let walls: Vec<[u32; 4]> = result.wall_segments.iter().map(wall_bits).collect();
        assert_eq!(partitions, expected_partitions);
        assert_eq!(walls, expected_walls);
        assert!(result.wall_segments.iter().all(|w| w.thickness == 0.1));
    }

    #[test]
    fn test_generator_continues_after_split() {
        let (_, mut rng_a) = split(footprint_12(), &config(4, 3.0, 8.0), 99);
        let (_, mut rng_b) = split(footprint_12(), &config(4, 3.0, 8.0), 99);
        assert_eq!(rng_a.gen::<u64>(), rng_b.gen::<u64>());
    }

    #[test]
    fn test_area_conservation() {
        for seed in 0..50 {
            let (result, _) = split(footprint_12(), &config(8, 2.0, 6.0), seed);
            let area = result.total_area();
            assert!(
                (area - 144.0).abs() < 1e-3,
                "seed {} lost area: {}",
                seed,
                area
            );
        }
    }

    #[test]
    fn test_leaves_inside_footprint_and_above_min_size() {
        let footprint = Rect::new(0.0, 0.0, 20.0, 14.0);
        for seed in 0..50 {
            let (result, _) = split(footprint, &config(10, 2.5, 6.0), seed);
            for rect in &result.partitions {
                assert!(footprint.contains_rect(rect));
                assert!(rect.width >= 2.5 - 1e-4);
                assert!(rect.height >= 2.5 - 1e-4);
            }
        }
    }

    #[test]
    fn test_wall_count_matches_successful_splits() {
        for seed in 0..50 {
            let (result, _) = split(footprint_12(), &config(6, 2.0, 8.0), seed);
            assert!(result.wall_segments.len() <= 6);
            assert_eq!(result.partitions.len(), result.wall_segments.len() + 1);
            for wall in &result.wall_segments {
                assert_eq!(wall.thickness, 0.1);
                assert!(!wall.is_degenerate());
            }
        }
    }

    #[test]
    fn test_stops_when_nothing_is_splittable() {
        // 5x5 cannot hold two 3-unit rooms on either axis
        let (result, _) = split(Rect::new(0.0, 0.0, 5.0, 5.0), &config(10, 3.0, 5.0), 1);
        assert_eq!(result.partitions.len(), 1);
        assert!(result.wall_segments.is_empty());
    }

    #[test]
    fn test_inverted_range_wastes_iteration() {
        // Wide rect forces a vertical cut, but the width cannot hold two
        // 5-unit rooms. The height is splittable, so the rect stays a
        // candidate and every iteration is consumed without a cut.
        let config = SplitConfig {
            iterations: 5,
            min_room_size: Vec2::new(5.0, 1.0),
            max_room_size: Vec2::new(8.0, 6.0),
            interior_wall_thickness: 0.1,
        };
        let (result, _) = split(Rect::new(0.0, 0.0, 8.0, 6.0), &config, 3);
        assert_eq!(result.partitions, vec![Rect::new(0.0, 0.0, 8.0, 6.0)]);
        assert!(result.wall_segments.is_empty());
    }

    #[test]
    fn test_vertical_cut_geometry() {
        let config = SplitConfig {
            iterations: 1,
            min_room_size: Vec2::new(4.0, 1.0),
            max_room_size: Vec2::new(10.0, 4.0),
            interior_wall_thickness: 0.15,
        };
        let rect = Rect::new(2.0, 1.0, 10.0, 4.0);
        let (result, _) = split(rect, &config, 42);

        assert_eq!(result.partitions.len(), 2);
        let first = result.partitions[0];
        let second = result.partitions[1];
        let wall = result.wall_segments[0];

        assert_eq!(first.x, 2.0);
        assert!(first.width >= 4.0 && first.width <= 6.0);
        assert!((first.max().x - second.x).abs() < 1e-5);
        assert!((first.width + second.width - 10.0).abs() < 1e-5);
        assert_eq!(first.height, 4.0);
        assert_eq!(second.height, 4.0);

        assert_eq!(wall.start, Vec2::new(second.x, 1.0));
        assert_eq!(wall.end, Vec2::new(second.x, 5.0));
        assert_eq!(wall.thickness, 0.15);
    }

    #[test]
    fn test_horizontal_cut_geometry() {
        let config = SplitConfig {
            iterations: 1,
            min_room_size: Vec2::new(1.0, 3.0),
            max_room_size: Vec2::new(4.0, 9.0),
            interior_wall_thickness: 0.1,
        };
        let rect = Rect::new(0.0, 0.0, 4.0, 9.0);
        let (result, _) = split(rect, &config, 5);

        let first = result.partitions[0];
        let second = result.partitions[1];
        let wall = result.wall_segments[0];

        assert_eq!(first.width, 4.0);
        assert!(first.height >= 3.0 && first.height <= 6.0);
        assert_eq!(wall.start, Vec2::new(0.0, second.y));
        assert_eq!(wall.end, Vec2::new(4.0, second.y));
    }

    #[test]
    fn test_is_splittable() {
        let min = Vec2::new(3.0, 3.0);
        assert!(is_splittable(&Rect::new(0.0, 0.0, 6.0, 2.0), min));
        assert!(is_splittable(&Rect::new(0.0, 0.0, 2.0, 6.0), min));
        assert!(!is_splittable(&Rect::new(0.0, 0.0, 5.9, 5.9), min));
    }
}
