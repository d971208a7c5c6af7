//! Plain rectangular rooms.

use dungen_core::{Point, Range, Tile};
use rand::Rng;

use crate::generator::{RoomGenerator, sample_dimensions};
use crate::room::Room;

/// Generates a rectangle: a ring of walls around solid floor.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectGenerator;

impl RoomGenerator for RectGenerator {
    fn sample_size(&self, rng: &mut impl Rng, min: i32, max: i32) -> Point {
        sample_dimensions(rng, min, max)
    }

    fn build(&self, _rng: &mut impl Rng, origin: Point, size: Point) -> Option<Room> {
        let mut room = Room::new(origin, size.x, size.y);
        carve_rect(&mut room, Range::with_size(Point::ZERO, size));
        Some(room)
    }
}

/// Carve a walled rectangle `r` (local coordinates) into `room`,
/// overwriting whatever was there.
///
/// Rectangles thinner than 3 tiles have no interior and become all wall.
fn carve_rect(room: &mut Room, r: Range) {
    if r.width() < 3 || r.height() < 3 {
        for p in r {
            room.set_tile(p, Tile::Wall);
        }
        return;
    }
    for p in r {
        let tile = if r.on_edge(p) { Tile::Wall } else { Tile::Floor };
        room.set_tile(p, tile);
    }
}
