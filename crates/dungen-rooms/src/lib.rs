//! Room generation and placement for dungen.
//!
//! Three room shapes (rectangular, compound, elliptical), a bounded random
//! placement search that keeps rooms a tile apart, and the [`Dungeon`]
//! controller that composites accepted rooms into one map.

pub mod compound;
pub mod config;
pub mod dungeon;
pub mod ellipse;
pub mod generator;
pub mod geometry;
pub mod placement;
pub mod rect;
pub mod room;

pub use compound::CompoundGenerator;
pub use config::{
    ConfigError, DungeonConfig, MAX_ROOM_CREATION_ATTEMPTS, MAX_SUB_ROOM_CREATION_ATTEMPTS,
};
pub use dungeon::{Dungeon, blit};
pub use ellipse::EllipseGenerator;
pub use generator::{RoomGenerator, RoomKind};
pub use placement::try_place;
pub use rect::RectGenerator;
pub use room::Room;
