//! Bounded random search for a free spot on the map.

use dungen_core::{Point, Range};
use rand::{Rng, RngExt};

use crate::generator::RoomGenerator;
use crate::geometry::{ROOM_MARGIN, overlaps};
use crate::room::Room;

/// Try to place one room from `generator` inside `bounds`.
///
/// Each attempt samples a size and a position that keeps the room inside
/// `bounds`, and rejects it if it comes within the room margin of any room in
/// `existing`. Only an accepted candidate is rasterized. Returns `None` when
/// `max_attempts` runs out, or when the generator fails to build the accepted
/// shape; neither is an error, the map simply gets one room fewer.
pub fn try_place<G: RoomGenerator>(
    rng: &mut impl Rng,
    generator: &G,
    min_size: i32,
    max_size: i32,
    existing: &[Room],
    bounds: Range,
    max_attempts: usize,
) -> Option<Room> {
    for _ in 0..max_attempts {
        let size = generator.sample_size(rng, min_size, max_size);
        if size.x > bounds.width() || size.y > bounds.height() {
            continue;
        }
        let origin = Point::new(
            rng.random_range(bounds.min.x..=bounds.max.x - size.x),
            rng.random_range(bounds.min.y..=bounds.max.y - size.y),
        );
        let candidate = Range::with_size(origin, size);
        if existing
            .iter()
            .any(|room| overlaps(room.bounds(), candidate, ROOM_MARGIN))
        {
            continue;
        }
        return generator.build(rng, origin, size);
    }
    log::warn!(
        "no free spot for a room of size {min_size}..={max_size} after {max_attempts} attempts"
    );
    None
}
