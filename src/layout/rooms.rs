//! Room sampling inside leaf partitions
//!
//! Each leaf gets at most one room. The room's size is drawn between the
//! configured min and max (capped by the leaf), and its center is drawn so
//! the room stays inside the leaf. Rooms are usually smaller than their leaf.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::types::{Rect, RoomSpec};

/// Sample one room per leaf rect, in leaf order.
///
/// Leaves with no usable extent are skipped, so `partition_index` on each
/// room refers back to its source leaf.
pub fn sample_rooms(
    partitions: &[Rect],
    min_room_size: Vec2,
    max_room_size: Vec2,
    rng: &mut ChaCha8Rng,
) -> Vec<RoomSpec> {
    partitions
        .iter()
        .enumerate()
        .filter_map(|(index, rect)| sample_room(index, rect, min_room_size, max_room_size, rng))
        .collect()
}

fn sample_room(
    index: usize,
    rect: &Rect,
    min_room_size: Vec2,
    max_room_size: Vec2,
    rng: &mut ChaCha8Rng,
) -> Option<RoomSpec> {
    let width_max = max_room_size.x.min(rect.width);
    let length_max = max_room_size.y.min(rect.height);
    if width_max <= 0.0 || length_max <= 0.0 {
        return None;
    }
    let width_min = min_room_size.x.min(width_max);
    let length_min = min_room_size.y.min(length_max);

    let width = rng.gen_range(width_min..=width_max);
    let length = rng.gen_range(length_min..=length_max);

    let center = Vec2::new(
        sample_center(rect.x, rect.width, width, rng),
        sample_center(rect.y, rect.height, length, rng),
    );

    Some(RoomSpec::new(center, width, length, index))
}

/// Draw a center coordinate on one axis that keeps a room of `size` inside
/// `[start, start + extent]`. Falls back to the leaf center without drawing
/// when the room does not leave any slack.
fn sample_center(start: f32, extent: f32, size: f32, rng: &mut ChaCha8Rng) -> f32 {
    let lo = start + size / 2.0;
    let hi = start + extent - size / 2.0;
    if lo >= hi {
        start + extent / 2.0
    } else {
        rng.gen_range(lo..=hi)
    }
}
