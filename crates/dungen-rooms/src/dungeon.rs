//! The dungeon controller: owns the map, the placed rooms and the random
//! source, and drives generation.

use std::fmt;

use dungen_core::{Point, Tile, TileGrid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::compound::CompoundGenerator;
use crate::config::{ConfigError, DungeonConfig};
use crate::ellipse::EllipseGenerator;
use crate::generator::RoomKind;
use crate::placement::try_place;
use crate::rect::RectGenerator;
use crate::room::Room;

/// A generated dungeon level.
pub struct Dungeon<R: Rng> {
    config: DungeonConfig,
    rng: R,
    grid: TileGrid,
    rooms: Vec<Room>,
}

impl Dungeon<StdRng> {
    /// Create a dungeon with a deterministic random source.
    pub fn from_seed(config: DungeonConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Dungeon<R> {
    /// Validate `config` and create an empty map.
    pub fn new(config: DungeonConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = TileGrid::new(config.width, config.height);
        Ok(Self {
            config,
            rng,
            grid,
            rooms: Vec::new(),
        })
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    /// The global map.
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Accepted rooms, in the order they were placed.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Tile at map position `p`, or `None` off the map.
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.grid.at(p)
    }

    /// Clear the map and make `room_count` placement attempts, each with a
    /// rolled room kind. Returns how many rooms were placed.
    pub fn generate_map(&mut self) -> usize {
        self.grid.fill(Tile::Empty);
        self.rooms.clear();

        for attempt in 0..self.config.room_count {
            let Some(kind) = RoomKind::roll(&mut self.rng) else {
                continue;
            };
            log::debug!("attempt {}: generating {kind} room", attempt + 1);
            if self.place_room(kind).is_none() {
                log::warn!("attempt {}: could not place a {kind} room", attempt + 1);
            }
        }

        log::info!(
            "placed {} of {} rooms on a {}x{} map",
            self.rooms.len(),
            self.config.room_count,
            self.config.width,
            self.config.height
        );
        self.rooms.len()
    }

    /// Make one placement attempt for a room of `kind` on the current map,
    /// compositing it on success.
    pub fn place_room(&mut self, kind: RoomKind) -> Option<&Room> {
        let cfg = &self.config;
        let bounds = self.grid.bounds();
        let (min, max, attempts) = (cfg.min_room_size, cfg.max_room_size, cfg.max_room_attempts);
        let rng = &mut self.rng;
        let room = match kind {
            RoomKind::Rectangular => {
                try_place(rng, &RectGenerator, min, max, &self.rooms, bounds, attempts)
            }
            RoomKind::Elliptical => {
                try_place(rng, &EllipseGenerator, min, max, &self.rooms, bounds, attempts)
            }
            RoomKind::Compound => {
                let compound = CompoundGenerator {
                    min_parts: cfg.min_sub_rooms,
                    max_parts: cfg.max_sub_rooms,
                    max_attempts: cfg.max_sub_room_attempts,
                };
                try_place(rng, &compound, min, max, &self.rooms, bounds, attempts)
            }
        }?;

        blit(&room, &mut self.grid);
        self.rooms.push(room);
        self.rooms.last()
    }

    /// Render the map as text: one line per row, each cell drawn as
    /// `cell_width` copies of its glyph.
    pub fn render(&self) -> String {
        let width = self.config.cell_width;
        let mut out = String::with_capacity(
            (self.grid.width() as usize * width + 1) * self.grid.height() as usize,
        );
        for row in self.grid.rows() {
            for tile in row {
                for _ in 0..width {
                    out.push(tile.glyph());
                }
            }
            out.push('\n');
        }
        out
    }
}

impl<R: Rng> fmt::Display for Dungeon<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Copy every tile of `room` onto `grid` at the room's origin, overwriting
/// what was there. Cells that would land off the grid are dropped.
pub fn blit(room: &Room, grid: &mut TileGrid) {
    let written = grid.copy_from(room.tiles(), room.origin());
    let total = room.tiles().bounds().len();
    if written < total {
        log::warn!(
            "room at {} clipped: {} of {total} tiles off the map",
            room.origin(),
            total - written
        );
    }
}
