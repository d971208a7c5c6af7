//! Compound rooms: several overlapping rectangles fused into one open area.
//!
//! A compound room is built inside an outer bounding buffer:
//! 1. Pick a number of parts and place each one at random inside the buffer.
//!    Every part after the first must touch or overlap an earlier part.
//! 2. Carve each part: floor inside, wall on its perimeter where nothing
//!    has been carved yet.
//! 3. Repair: walls enclosed by the room (no empty neighbor) that border
//!    floor are opened up, so crossing perimeters do not split the room.

use dungen_core::{Point, Range, Tile};
use rand::{Rng, RngExt};

use crate::config::MAX_SUB_ROOM_CREATION_ATTEMPTS;
use crate::generator::{RoomGenerator, sample_dimensions};
use crate::geometry::overlaps;
use crate::room::Room;

/// Generates rooms made of `min_parts..=max_parts` fused rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundGenerator {
    pub min_parts: u32,
    pub max_parts: u32,
    /// Samples allowed per part before the whole room is abandoned.
    pub max_attempts: usize,
}

impl Default for CompoundGenerator {
    fn default() -> Self {
        Self {
            min_parts: 2,
            max_parts: 5,
            max_attempts: MAX_SUB_ROOM_CREATION_ATTEMPTS,
        }
    }
}

impl RoomGenerator for CompoundGenerator {
    fn sample_size(&self, rng: &mut impl Rng, min: i32, max: i32) -> Point {
        sample_dimensions(rng, min, max)
    }

    fn build(&self, rng: &mut impl Rng, origin: Point, size: Point) -> Option<Room> {
        let mut room = Room::new(origin, size.x, size.y);
        let count = rng.random_range(self.min_parts..=self.max_parts);
        let (min_w, max_w) = part_span(size.x);
        let (min_h, max_h) = part_span(size.y);

        let mut parts: Vec<Range> = Vec::with_capacity(count as usize);
        for i in 0..count {
            let mut accepted = None;
            for _ in 0..self.max_attempts {
                let part_size = Point::new(
                    rng.random_range(min_w..=max_w),
                    rng.random_range(min_h..=max_h),
                );
                let at = Point::new(
                    rng.random_range(0..=size.x - part_size.x),
                    rng.random_range(0..=size.y - part_size.y),
                );
                let part = Range::with_size(at, part_size);
                if parts.is_empty() || parts.iter().any(|&q| overlaps(q, part, 0)) {
                    accepted = Some(part);
                    break;
                }
            }
            let Some(part) = accepted else {
                log::warn!(
                    "compound room {}x{}: part {} of {count} found no overlapping spot in {} attempts",
                    size.x,
                    size.y,
                    i + 1,
                    self.max_attempts
                );
                return None;
            };
            carve_part(&mut room, part);
            parts.push(part);
        }

        repair_walls(&mut room);
        Some(room)
    }
}

/// Allowed side lengths of a part inside an outer side of `n` tiles:
/// from half to two thirds of `n`, rounded, kept within `1..=n`.
fn part_span(n: i32) -> (i32, i32) {
    let lo = ((n as f64 / 2.0).round() as i32).clamp(1, n.max(1));
    let hi = ((n as f64 / 1.5).round() as i32).clamp(lo, n.max(1));
    (lo, hi)
}

/// Carve one part: floor inside, wall on the perimeter only where the cell
/// is still empty, so floor shared with earlier parts stays open.
fn carve_part(room: &mut Room, part: Range) {
    for p in part {
        if part.on_edge(p) {
            if room.tile(p) == Some(Tile::Empty) {
                room.set_tile(p, Tile::Wall);
            }
        } else {
            room.set_tile(p, Tile::Floor);
        }
    }
}

/// Open up walls that sit inside the room: a wall bordering floor with no
/// empty neighbor becomes floor. Neighborhoods are read from the carved
/// state, not from cells already repaired in this pass.
fn repair_walls(room: &mut Room) {
    let carved = room.clone();
    for (p, tile) in carved.tiles().iter() {
        if tile == Tile::Wall
            && carved.has_neighbor(p, Tile::Floor)
            && !carved.has_neighbor(p, Tile::Empty)
        {
            room.set_tile(p, Tile::Floor);
        }
    }
}
