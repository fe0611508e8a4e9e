//! Zone naming and row layout.
//!
//! Every tile in the game sits in exactly one zone. The ledger stores zones
//! as rows of a dense matrix; `ZoneLayout` maps a `Zone` to its row index for
//! a given table size. Shared zones come first, then the factory displays,
//! then each player's seven board rows, then the player hands.

use serde::{Deserialize, Serialize};

use crate::core::{StarColor, PlayerId};

/// A named holder of tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Face-down pool the displays and supply are filled from.
    Bag,
    /// Discard pile, reclaimed into the Bag when the Bag runs dry.
    Tower,
    /// Shared pool of tiles discarded from drafted displays.
    TableCenter,
    /// Bonus-draw pool, refilled to its cap each round.
    Supply,
    /// Factory display `n`, 0-based.
    Display(u8),
    /// Tiles a player has drafted but not yet played.
    Hand(PlayerId),
    /// Tiles placed on one star of a player's board.
    BoardRow(PlayerId, StarColor),
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Bag => f.write_str("Bag"),
            Zone::Tower => f.write_str("Tower"),
            Zone::TableCenter => f.write_str("TableCenter"),
            Zone::Supply => f.write_str("Supply"),
            Zone::Display(n) => write!(f, "Display {n}"),
            Zone::Hand(p) => write!(f, "{p} hand"),
            Zone::BoardRow(p, star) => write!(f, "{p} {star} star row"),
        }
    }
}

/// Row indexing for a fixed table size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneLayout {
    displays: u8,
    players: u8,
}

const SHARED_ROWS: usize = 4;
const ROWS_PER_BOARD: usize = 7;

impl ZoneLayout {
    /// Layout for `players` players and `displays` factory displays.
    #[must_use]
    pub fn new(players: u8, displays: u8) -> Self {
        Self { displays, players }
    }

    /// Total rows in the ledger matrix.
    #[must_use]
    pub fn rows(&self) -> usize {
        SHARED_ROWS
            + self.displays as usize
            + self.players as usize * ROWS_PER_BOARD
            + self.players as usize
    }

    /// Number of factory displays.
    #[must_use]
    pub fn displays(&self) -> u8 {
        self.displays
    }

    /// Number of players.
    #[must_use]
    pub fn players(&self) -> u8 {
        self.players
    }

    /// Row index of a zone.
    ///
    /// Zones are produced by the engine itself, so an out-of-range display or
    /// player index is a programmer error.
    #[must_use]
    pub fn index(&self, zone: Zone) -> usize {
        match zone {
            Zone::Bag => 0,
            Zone::Tower => 1,
            Zone::TableCenter => 2,
            Zone::Supply => 3,
            Zone::Display(n) => {
                debug_assert!(n < self.displays, "display {n} out of range");
                SHARED_ROWS + n as usize
            }
            Zone::BoardRow(p, star) => {
                debug_assert!(p.0 < self.players, "{p} out of range");
                SHARED_ROWS
                    + self.displays as usize
                    + p.index() * ROWS_PER_BOARD
                    + star.index()
            }
            Zone::Hand(p) => {
                debug_assert!(p.0 < self.players, "{p} out of range");
                SHARED_ROWS
                    + self.displays as usize
                    + self.players as usize * ROWS_PER_BOARD
                    + p.index()
            }
        }
    }

    /// All factory display zones, index ascending.
    pub fn display_zones(&self) -> impl Iterator<Item = Zone> {
        (0..self.displays).map(Zone::Display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count_two_players() {
        // 4 shared + 5 displays + 2 * 7 boards + 2 hands
        assert_eq!(ZoneLayout::new(2, 5).rows(), 25);
    }

    #[test]
    fn test_row_count_four_players() {
        assert_eq!(ZoneLayout::new(4, 9).rows(), 45);
    }

    #[test]
    fn test_indices_are_distinct_and_dense() {
        let layout = ZoneLayout::new(3, 7);
        let mut zones = vec![Zone::Bag, Zone::Tower, Zone::TableCenter, Zone::Supply];
        zones.extend(layout.display_zones());
        for p in PlayerId::all(3) {
            for star in StarColor::ALL {
                zones.push(Zone::BoardRow(p, star));
            }
        }
        for p in PlayerId::all(3) {
            zones.push(Zone::Hand(p));
        }

        let mut indices: Vec<_> = zones.iter().map(|&z| layout.index(z)).collect();
        indices.sort_unstable();
        let expected: Vec<_> = (0..layout.rows()).collect();
        assert_eq!(indices, expected);
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(Zone::Display(2).to_string(), "Display 2");
        assert_eq!(
            Zone::BoardRow(PlayerId::new(1), StarColor::Wild).to_string(),
            "Player 1 Wild star row"
        );
    }
}
