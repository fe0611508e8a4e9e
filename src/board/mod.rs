//! Player boards and placement scoring.
//!
//! A board is seven stars of six cost slots each: one star per tile color
//! plus the Wild star, which admits each color at most once. Placement
//! scoring is purely local to a star: 1 point for the placed tile plus every
//! occupied slot transitively connected to it around the star's circular
//! slot sequence (slot 6 wraps to slot 1). Adjacency never crosses stars.

pub mod bonus;

pub use bonus::{standard_groups, BonusGroup, BonusKind, BonusTracker};

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, StarColor, TileColor, SLOTS_PER_STAR};

/// One player's placement grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBoard {
    occupied: [[bool; 6]; 7],
    wild_colors: [Option<TileColor>; 6],
}

impl PlayerBoard {
    /// A fresh, empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `slot` (1-based) on `star` holds a tile.
    #[must_use]
    pub fn is_occupied(&self, star: StarColor, slot: u8) -> bool {
        slot >= 1 && slot <= SLOTS_PER_STAR && self.occupied[star.index()][slot as usize - 1]
    }

    /// True if `slot` is a valid, unoccupied target on `star`.
    #[must_use]
    pub fn is_open(&self, star: StarColor, slot: u8) -> bool {
        slot >= 1 && slot <= SLOTS_PER_STAR && !self.occupied[star.index()][slot as usize - 1]
    }

    /// True if `color` already occupies some Wild-star slot.
    #[must_use]
    pub fn has_wild_color(&self, color: TileColor) -> bool {
        self.wild_colors.contains(&Some(color))
    }

    /// Place a tile of `color` on `star` at `slot`, returning the points
    /// scored.
    ///
    /// Fails without mutating if the cell is occupied or out of range, or if
    /// the Wild star already holds this color.
    pub fn place(
        &mut self,
        star: StarColor,
        slot: u8,
        color: TileColor,
    ) -> Result<u16, EngineError> {
        if !self.is_open(star, slot) {
            return Err(EngineError::InvalidPlacement { star, slot });
        }
        if star == StarColor::Wild && self.has_wild_color(color) {
            return Err(EngineError::WildStarRepeat { color });
        }

        let points = self.placement_score(star, slot);
        self.occupied[star.index()][slot as usize - 1] = true;
        if star == StarColor::Wild {
            self.wild_colors[slot as usize - 1] = Some(color);
        }
        Ok(points)
    }

    /// Points for placing on `star` at `slot`: 1 plus the occupied slots
    /// reachable from it around the star.
    ///
    /// Breadth-first over the circular slot sequence; stops at the first
    /// unoccupied slot in each direction.
    #[must_use]
    pub fn placement_score(&self, star: StarColor, slot: u8) -> u16 {
        let row = &self.occupied[star.index()];
        let start = slot as usize - 1;
        let mut seen = [false; 6];
        seen[start] = true;
        let mut queue = VecDeque::from([start]);
        let mut points = 1u16;

        while let Some(current) = queue.pop_front() {
            for neighbor in [(current + 5) % 6, (current + 1) % 6] {
                if !seen[neighbor] && row[neighbor] {
                    seen[neighbor] = true;
                    points += 1;
                    queue.push_back(neighbor);
                }
            }
        }
        points
    }

    /// True if every slot of `star` is occupied.
    #[must_use]
    pub fn is_star_complete(&self, star: StarColor) -> bool {
        self.occupied[star.index()].iter().all(|&o| o)
    }

    /// True if `slot` is occupied on all seven stars.
    #[must_use]
    pub fn covers_slot_value(&self, slot: u8) -> bool {
        StarColor::ALL.iter().all(|&star| self.is_occupied(star, slot))
    }

    /// Occupied slots on one star.
    #[must_use]
    pub fn occupied_count(&self, star: StarColor) -> u8 {
        self.occupied[star.index()].iter().filter(|&&o| o).count() as u8
    }
}
