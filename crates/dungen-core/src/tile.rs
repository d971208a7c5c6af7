//! The [`Tile`] type — the value held by every map cell.

use std::fmt;

/// A single map cell value.
///
/// Generators only ever produce `Empty`, `Wall` and `Floor`; the remaining
/// variants are reserved for later stages (doors, actors, markers).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tile {
    #[default]
    Empty,
    Wall,
    Floor,
    Door,
    Player,
    Placeholder,
}

impl Tile {
    /// Every tile variant, in declaration order.
    pub const ALL: [Tile; 6] = [
        Tile::Empty,
        Tile::Wall,
        Tile::Floor,
        Tile::Door,
        Tile::Player,
        Tile::Placeholder,
    ];

    /// Printable glyph used by the text renderer.
    ///
    /// Doors share the floor glyph.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Tile::Empty => ' ',
            Tile::Wall => '#',
            Tile::Floor | Tile::Door => '.',
            Tile::Player => '@',
            Tile::Placeholder => '?',
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
