//! The [`TileGrid`] type — an owned, row-major 2D buffer of [`Tile`]s.
//!
//! Unlike a view over shared storage, a `TileGrid` owns its cells: a room's
//! local buffer and the global map are independent values, and copying tiles
//! between them goes through [`copy_from`](TileGrid::copy_from).

use crate::geom::{Point, Range};
use crate::tile::Tile;

/// A fixed-size 2D grid of [`Tile`] values, initialized to [`Tile::Empty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    cells: Vec<Tile>,
    width: i32,
    height: i32,
}

impl TileGrid {
    /// Create a new grid filled with `Tile::Empty`. Negative dimensions are
    /// treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            cells: vec![Tile::Empty; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    /// The bounding range, always anchored at (0, 0).
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Size as a Point (x = width, y = height).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| (p.y as usize) * (self.width as usize) + (p.x as usize))
    }

    /// Get the tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the tile at `p`. Does nothing if out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.index(p) {
            self.cells[i] = tile;
        }
    }

    /// Fill the entire grid with `tile`.
    pub fn fill(&mut self, tile: Tile) {
        self.cells.fill(tile);
    }

    /// Copy every cell of `src` into `self`, shifted by `offset`.
    ///
    /// Destination cells outside `self` are skipped. Returns the number of
    /// cells written.
    pub fn copy_from(&mut self, src: &TileGrid, offset: Point) -> usize {
        let mut written = 0;
        for (p, tile) in src.iter() {
            let dst = p + offset;
            if let Some(i) = self.index(dst) {
                self.cells[i] = tile;
                written += 1;
            }
        }
        written
    }

    /// Count how many cells equal `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&t| t == tile).count()
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        // A zero-width grid still has `height` (empty) rows.
        (0..self.height as usize).map(move |y| {
            let w = self.width as usize;
            &self.cells[y * w..(y + 1) * w]
        })
    }

    /// Row-major iterator over `(Point, Tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let g = TileGrid::new(10, 5);
        assert_eq!(g.size(), Point::new(10, 5));
        assert_eq!(g.count(Tile::Empty), 50);
    }

    #[test]
    fn set_and_at() {
        let mut g = TileGrid::new(4, 4);
        let p = Point::new(2, 3);
        g.set(p, Tile::Wall);
        assert_eq!(g.at(p), Some(Tile::Wall));
        assert_eq!(g.at(Point::new(0, 0)), Some(Tile::Empty));
        assert_eq!(g.at(Point::new(4, 0)), None);
        assert_eq!(g.at(Point::new(-1, 0)), None);
        // out of bounds writes are dropped
        g.set(Point::new(10, 10), Tile::Floor);
        assert_eq!(g.count(Tile::Floor), 0);
    }

    #[test]
    fn fill() {
        let mut g = TileGrid::new(5, 5);
        g.fill(Tile::Wall);
        assert_eq!(g.count(Tile::Wall), 25);
        assert_eq!(g.bounds(), Range::new(0, 0, 5, 5));
    }

    #[test]
    fn copy_from_clips() {
        let mut src = TileGrid::new(3, 3);
        src.fill(Tile::Floor);
        let mut dst = TileGrid::new(4, 4);
        let written = dst.copy_from(&src, Point::new(2, 2));
        assert_eq!(written, 4);
        assert_eq!(dst.at(Point::new(2, 2)), Some(Tile::Floor));
        assert_eq!(dst.at(Point::new(3, 3)), Some(Tile::Floor));
        assert_eq!(dst.at(Point::new(1, 1)), Some(Tile::Empty));
    }

    #[test]
    fn copy_from_overwrites_with_empty() {
        let src = TileGrid::new(2, 2);
        let mut dst = TileGrid::new(2, 2);
        dst.fill(Tile::Wall);
        dst.copy_from(&src, Point::ZERO);
        assert_eq!(dst.count(Tile::Empty), 4);
    }

    #[test]
    fn rows_and_iter() {
        let mut g = TileGrid::new(3, 2);
        g.set(Point::new(1, 0), Tile::Floor);
        let rows: Vec<_> = g.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[Tile::Empty, Tile::Floor, Tile::Empty]);
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[1], (Point::new(1, 0), Tile::Floor));
    }
}
