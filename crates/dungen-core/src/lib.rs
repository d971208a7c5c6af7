//! **dungen-core** — core types for the dungen map generator.
//!
//! Geometry primitives, the [`Tile`] enumeration and the owned [`TileGrid`]
//! buffer shared by rooms and the global map.

pub mod geom;
pub mod grid;
pub mod tile;

pub use geom::{Point, Range};
pub use grid::TileGrid;
pub use tile::Tile;
