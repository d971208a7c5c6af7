//! A generated room: a local tile buffer plus its place on the map.

use dungen_core::{Point, Range, Tile, TileGrid};

use crate::geometry::{ROOM_MARGIN, overlaps};

/// One room, addressed in local coordinates `(0, 0)..size`.
///
/// `origin` is where the local `(0, 0)` lands on the global map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    origin: Point,
    tiles: TileGrid,
}

impl Room {
    /// Create an all-`Empty` room of the given size at `origin`.
    pub fn new(origin: Point, width: i32, height: i32) -> Self {
        Self {
            origin,
            tiles: TileGrid::new(width, height),
        }
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.origin.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.origin.y
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.tiles.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.tiles.height()
    }

    #[inline]
    pub fn size(&self) -> Point {
        self.tiles.size()
    }

    /// Extent of the room in global map coordinates.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::with_size(self.origin, self.size())
    }

    /// The local tile buffer.
    #[inline]
    pub fn tiles(&self) -> &TileGrid {
        &self.tiles
    }

    /// Tile at local position `p`, or `None` outside the room.
    #[inline]
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.tiles.at(p)
    }

    /// Set the tile at local position `p`. Ignored outside the room.
    #[inline]
    pub fn set_tile(&mut self, p: Point, tile: Tile) {
        self.tiles.set(p, tile);
    }

    /// Whether this room and `other` are closer than the placement margin.
    pub fn overlaps(&self, other: &Room) -> bool {
        overlaps(self.bounds(), other.bounds(), ROOM_MARGIN)
    }

    /// Whether any of the 8 cells around local `p` holds `tile`.
    ///
    /// Cells on the room edge always have an `Empty` neighbor: the open
    /// exterior beyond the buffer.
    pub fn has_neighbor(&self, p: Point, tile: Tile) -> bool {
        if tile == Tile::Empty && self.tiles.bounds().on_edge(p) {
            return true;
        }
        p.neighbors_8()
            .into_iter()
            .any(|q| self.tiles.at(q) == Some(tile))
    }

    /// Whether any of the 4 cardinal cells around local `p` holds `tile`.
    /// Cells outside the room are ignored.
    pub fn has_cardinal_neighbor(&self, p: Point, tile: Tile) -> bool {
        p.neighbors_4()
            .into_iter()
            .any(|q| self.tiles.at(q) == Some(tile))
    }
}
