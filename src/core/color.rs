//! Tile and star color enumerations.
//!
//! `TileColor` is the column axis of every tile count vector in the engine.
//! `StarColor` extends it with the Wild star, the seventh scoring track on
//! each player board. The wild color rotates once per round in a fixed order.

use serde::{Deserialize, Serialize};

/// One of the six tile colors.
///
/// The discriminant is the column index used by [`TileCount`] and the ledger.
///
/// [`TileCount`]: crate::core::TileCount
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum TileColor {
    Orange = 0,
    Red = 1,
    Blue = 2,
    Yellow = 3,
    Green = 4,
    Purple = 5,
}

impl TileColor {
    /// All colors in column order.
    pub const ALL: [TileColor; 6] = [
        TileColor::Orange,
        TileColor::Red,
        TileColor::Blue,
        TileColor::Yellow,
        TileColor::Green,
        TileColor::Purple,
    ];

    /// Column index of this color.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The star this color is played on when not spent as a wild.
    #[must_use]
    pub const fn star(self) -> StarColor {
        match self {
            TileColor::Orange => StarColor::Orange,
            TileColor::Red => StarColor::Red,
            TileColor::Blue => StarColor::Blue,
            TileColor::Yellow => StarColor::Yellow,
            TileColor::Green => StarColor::Green,
            TileColor::Purple => StarColor::Purple,
        }
    }
}

impl std::fmt::Display for TileColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TileColor::Orange => "Orange",
            TileColor::Red => "Red",
            TileColor::Blue => "Blue",
            TileColor::Yellow => "Yellow",
            TileColor::Green => "Green",
            TileColor::Purple => "Purple",
        };
        f.write_str(name)
    }
}

/// Wild color by round, rounds 1 through 6.
pub const WILD_ROUND_ORDER: [TileColor; 6] = [
    TileColor::Purple,
    TileColor::Green,
    TileColor::Orange,
    TileColor::Yellow,
    TileColor::Blue,
    TileColor::Red,
];

/// One of the seven scoring stars on a player board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum StarColor {
    Orange = 0,
    Red = 1,
    Blue = 2,
    Yellow = 3,
    Green = 4,
    Purple = 5,
    Wild = 6,
}

impl StarColor {
    /// All stars, colored stars first, Wild last.
    pub const ALL: [StarColor; 7] = [
        StarColor::Orange,
        StarColor::Red,
        StarColor::Blue,
        StarColor::Yellow,
        StarColor::Green,
        StarColor::Purple,
        StarColor::Wild,
    ];

    /// Row index of this star.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The tile color matching this star, or `None` for the Wild star.
    #[must_use]
    pub const fn color(self) -> Option<TileColor> {
        match self {
            StarColor::Orange => Some(TileColor::Orange),
            StarColor::Red => Some(TileColor::Red),
            StarColor::Blue => Some(TileColor::Blue),
            StarColor::Yellow => Some(TileColor::Yellow),
            StarColor::Green => Some(TileColor::Green),
            StarColor::Purple => Some(TileColor::Purple),
            StarColor::Wild => None,
        }
    }
}

impl std::fmt::Display for StarColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.color() {
            Some(color) => color.fmt(f),
            None => f.write_str("Wild"),
        }
    }
}
