//! Dungeon construction parameters and their validation.

use std::fmt;

/// Default bound on placement attempts for a single room.
pub const MAX_ROOM_CREATION_ATTEMPTS: usize = 100_000;

/// Default bound on attempts for a single part of a compound room.
pub const MAX_SUB_ROOM_CREATION_ATTEMPTS: usize = 1_000;

/// Parameters for a [`Dungeon`](crate::Dungeon).
///
/// `Default` gives a 200×120 map with 69 placement attempts for rooms of
/// side 7..=18.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonConfig {
    /// Grid width in cells.
    pub width: i32,
    /// Grid height in cells.
    pub height: i32,
    /// Smallest room side, inclusive.
    pub min_room_size: i32,
    /// Largest room side, inclusive.
    pub max_room_size: i32,
    /// How many rooms to try to place. This is a ceiling, not a guarantee.
    pub room_count: usize,
    /// Fewest rectangles making up a compound room.
    pub min_sub_rooms: u32,
    /// Most rectangles making up a compound room.
    pub max_sub_rooms: u32,
    /// Placement attempts per room before giving up.
    pub max_room_attempts: usize,
    /// Attempts per compound part before the whole compound room fails.
    pub max_sub_room_attempts: usize,
    /// How many times each glyph is repeated when rendering a cell.
    pub cell_width: usize,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 120,
            min_room_size: 7,
            max_room_size: 18,
            room_count: 69,
            min_sub_rooms: 2,
            max_sub_rooms: 5,
            max_room_attempts: MAX_ROOM_CREATION_ATTEMPTS,
            max_sub_room_attempts: MAX_SUB_ROOM_CREATION_ATTEMPTS,
            cell_width: 1,
        }
    }
}

impl DungeonConfig {
    /// Check every parameter, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::InvalidGridSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_room_size < 1 {
            return Err(ConfigError::InvalidMinRoomSize(self.min_room_size));
        }
        if self.min_room_size > self.max_room_size {
            return Err(ConfigError::RoomSizeRange {
                min: self.min_room_size,
                max: self.max_room_size,
            });
        }
        if self.max_room_size > self.width || self.max_room_size > self.height {
            return Err(ConfigError::RoomTooLarge {
                max: self.max_room_size,
                width: self.width,
                height: self.height,
            });
        }
        if self.min_sub_rooms < 1 || self.min_sub_rooms > self.max_sub_rooms {
            return Err(ConfigError::SubRoomRange {
                min: self.min_sub_rooms,
                max: self.max_sub_rooms,
            });
        }
        if self.max_room_attempts == 0 {
            return Err(ConfigError::ZeroAttempts("max_room_attempts"));
        }
        if self.max_sub_room_attempts == 0 {
            return Err(ConfigError::ZeroAttempts("max_sub_room_attempts"));
        }
        if self.cell_width == 0 {
            return Err(ConfigError::ZeroCellWidth);
        }
        Ok(())
    }
}

/// Errors reported when a [`DungeonConfig`] is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid width or height is zero or negative.
    InvalidGridSize { width: i32, height: i32 },
    /// Minimum room size is below one tile.
    InvalidMinRoomSize(i32),
    /// Minimum room size exceeds the maximum.
    RoomSizeRange { min: i32, max: i32 },
    /// Maximum room size does not fit in the grid.
    RoomTooLarge { max: i32, width: i32, height: i32 },
    /// Compound part count bounds are empty or start below one.
    SubRoomRange { min: u32, max: u32 },
    /// An attempt bound is zero; names the offending field.
    ZeroAttempts(&'static str),
    /// Cells would render with no glyphs.
    ZeroCellWidth,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridSize { width, height } => {
                write!(f, "config: grid size {width}x{height} must be positive")
            }
            Self::InvalidMinRoomSize(min) => {
                write!(f, "config: minimum room size {min} must be at least 1")
            }
            Self::RoomSizeRange { min, max } => write!(
                f,
                "config: minimum room size {min} is larger than maximum room size {max}"
            ),
            Self::RoomTooLarge { max, width, height } => write!(
                f,
                "config: maximum room size {max} does not fit in a {width}x{height} grid"
            ),
            Self::SubRoomRange { min, max } => write!(
                f,
                "config: compound part count range {min}..={max} is invalid"
            ),
            Self::ZeroAttempts(field) => write!(f, "config: {field} must be greater than 0"),
            Self::ZeroCellWidth => write!(f, "config: cell_width must be greater than 0"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(DungeonConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_grid() {
        let cfg = DungeonConfig {
            width: 0,
            ..DungeonConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidGridSize {
                width: 0,
                height: 120
            })
        );
    }

    #[test]
    fn rejects_inverted_room_sizes() {
        let cfg = DungeonConfig {
            min_room_size: 10,
            max_room_size: 5,
            ..DungeonConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::RoomSizeRange { min: 10, max: 5 })
        );
    }

    #[test]
    fn rejects_zero_min_room_size() {
        let cfg = DungeonConfig {
            min_room_size: 0,
            ..DungeonConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidMinRoomSize(0)));
    }

    #[test]
    fn rejects_room_larger_than_grid() {
        let cfg = DungeonConfig {
            width: 30,
            height: 10,
            min_room_size: 5,
            max_room_size: 12,
            ..DungeonConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::RoomTooLarge { max: 12, .. })
        ));
    }

    #[test]
    fn rejects_bad_sub_room_range() {
        let cfg = DungeonConfig {
            min_sub_rooms: 0,
            ..DungeonConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = DungeonConfig {
            min_sub_rooms: 4,
            max_sub_rooms: 3,
            ..DungeonConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::SubRoomRange { min: 4, max: 3 })
        );
    }

    #[test]
    fn rejects_zero_bounds_and_width() {
        let cfg = DungeonConfig {
            max_room_attempts: 0,
            ..DungeonConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::ZeroAttempts("max_room_attempts"))
        );
        let cfg = DungeonConfig {
            cell_width: 0,
            ..DungeonConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroCellWidth));
    }

    #[test]
    fn error_messages() {
        let e = ConfigError::RoomSizeRange { min: 9, max: 3 };
        assert_eq!(
            e.to_string(),
            "config: minimum room size 9 is larger than maximum room size 3"
        );
    }
}
