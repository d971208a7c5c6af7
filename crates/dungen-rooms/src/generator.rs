//! The room generator interface and room-kind selection.

use std::fmt;

use dungen_core::Point;
use rand::{Rng, RngExt};

use crate::room::Room;

/// Produces rooms of one shape.
///
/// Placement needs the size before the room exists, so generation is split
/// in two: [`sample_size`](Self::sample_size) picks the bounding box and
/// [`build`](Self::build) rasterizes it once a position has been accepted.
pub trait RoomGenerator {
    /// Draw room dimensions from `[min, max]`, applying any shape constraint.
    fn sample_size(&self, rng: &mut impl Rng, min: i32, max: i32) -> Point;

    /// Rasterize a room of `size` at `origin`.
    ///
    /// Returns `None` when the shape could not be built within the
    /// generator's own attempt bound.
    fn build(&self, rng: &mut impl Rng, origin: Point, size: Point) -> Option<Room>;

    /// Sample a size and build a room at the origin.
    fn generate(&self, rng: &mut impl Rng, min: i32, max: i32) -> Option<Room> {
        let size = self.sample_size(rng, min, max);
        self.build(rng, Point::ZERO, size)
    }
}

/// Draw both sides of a room uniformly from `[min, max]`.
pub(crate) fn sample_dimensions(rng: &mut impl Rng, min: i32, max: i32) -> Point {
    let w = rng.random_range(min..=max);
    let h = rng.random_range(min..=max);
    Point::new(w, h)
}

/// The room shapes the dungeon can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomKind {
    Rectangular,
    Compound,
    Elliptical,
}

impl RoomKind {
    /// Pick the kind of the next room.
    ///
    /// Draws from `0..=100`: below 70 is compound, below 100 elliptical.
    /// The top value is kept for a special room type and yields `None`;
    /// rectangular rooms are never rolled.
    pub fn roll(rng: &mut impl Rng) -> Option<RoomKind> {
        let roll = rng.random_range(0..=100);
        match roll {
            0..70 => Some(RoomKind::Compound),
            70..100 => Some(RoomKind::Elliptical),
            _ => {
                log::debug!("rolled {roll}: special room, nothing to place");
                None
            }
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoomKind::Rectangular => "rectangular",
            RoomKind::Compound => "compound",
            RoomKind::Elliptical => "elliptical",
        };
        f.write_str(name)
    }
}
