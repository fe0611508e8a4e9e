//! The tile ledger: one matrix, every tile accounted for.
//!
//! The `Ledger` is the single source of truth for tile location. It holds one
//! count row per [`Zone`] and is mutated only through [`Ledger::move_tiles`],
//! which subtracts from the source, adds to the destination, and then audits
//! that every color still sums to its fixed total across all rows. The ledger
//! never clamps: a move that would drive a zone negative is refused before
//! any mutation, and reported as an integrity defect in the caller.
//!
//! ## Invariant
//!
//! 132 tiles in play, 22 of each color, before and after every mutation.

mod zone;

pub use zone::{Zone, ZoneLayout};

use tracing::trace;

use crate::core::{
    EngineError, SessionConfig, TileColor, TileCount, SUPPLY_CAP, TILES_PER_COLOR,
};

/// Count matrix over all zones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ledger {
    layout: ZoneLayout,
    rows: Vec<TileCount>,
}

impl Ledger {
    /// Create a ledger with the full tile pool in the Bag.
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        let layout = ZoneLayout::new(config.player_count() as u8, config.displays());
        let mut rows = vec![TileCount::EMPTY; layout.rows()];
        rows[layout.index(Zone::Bag)] = TileCount::uniform(TILES_PER_COLOR);
        Self { layout, rows }
    }

    /// The row layout in use.
    #[must_use]
    pub fn layout(&self) -> &ZoneLayout {
        &self.layout
    }

    /// Read-only view of a zone's counts.
    #[must_use]
    pub fn view(&self, zone: Zone) -> &TileCount {
        &self.rows[self.layout.index(zone)]
    }

    /// Total tiles in a zone.
    #[must_use]
    pub fn quantity(&self, zone: Zone) -> u16 {
        self.view(zone).total()
    }

    /// Move `tiles` from `source` to `dest`.
    ///
    /// Refuses, without mutating, any move the source cannot cover. After a
    /// successful move the whole matrix is audited; a failed audit means a
    /// handler or generator defect and is fatal.
    pub fn move_tiles(
        &mut self,
        source: Zone,
        dest: Zone,
        tiles: &TileCount,
    ) -> Result<(), EngineError> {
        let src_row = self.layout.index(source);
        let dest_row = self.layout.index(dest);

        let Some(new_src) = self.rows[src_row].checked_sub(tiles) else {
            let color = self.rows[src_row]
                .first_deficit(tiles)
                .unwrap_or(TileColor::Orange);
            return Err(EngineError::ZoneUnderflow {
                zone: source,
                color,
            });
        };
        self.rows[src_row] = new_src;

        match self.rows[dest_row].checked_add(tiles) {
            Some(new_dest) => self.rows[dest_row] = new_dest,
            None => {
                let color = TileColor::ALL
                    .into_iter()
                    .find(|&c| {
                        self.rows[dest_row]
                            .get(c)
                            .checked_add(tiles.get(c))
                            .is_none()
                    })
                    .unwrap_or(TileColor::Orange);
                return Err(EngineError::ZoneOverflow { zone: dest, color });
            }
        }

        trace!(%source, %dest, %tiles, "tiles moved");
        self.verify_conservation()
    }

    /// Check that every color sums to its fixed total across all zones.
    pub fn verify_conservation(&self) -> Result<(), EngineError> {
        for color in TileColor::ALL {
            let found: u16 = self.rows.iter().map(|row| u16::from(row.get(color))).sum();
            if found != u16::from(TILES_PER_COLOR) {
                return Err(EngineError::Conservation {
                    color,
                    found,
                    expected: u16::from(TILES_PER_COLOR),
                });
            }
        }
        Ok(())
    }

    /// Factory display zones with their contents, index ascending.
    pub fn displays(&self) -> impl Iterator<Item = (u8, &TileCount)> {
        (0..self.layout.displays()).map(move |n| (n, self.view(Zone::Display(n))))
    }

    /// True when every factory display and the table center are empty.
    ///
    /// This is the acquisition phase's end criterion.
    #[must_use]
    pub fn displays_and_center_empty(&self) -> bool {
        self.quantity(Zone::TableCenter) == 0
            && self.displays().all(|(_, tiles)| tiles.is_empty())
    }

    /// Tiles the supply is short of its cap.
    #[must_use]
    pub fn supply_deficit(&self) -> u8 {
        let held = self.quantity(Zone::Supply).min(u16::from(SUPPLY_CAP)) as u8;
        SUPPLY_CAP - held
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn ledger() -> Ledger {
        Ledger::new(&SessionConfig::new(2).unwrap())
    }

    #[test]
    fn test_new_ledger_holds_everything_in_the_bag() {
        let ledger = ledger();
        assert_eq!(ledger.quantity(Zone::Bag), 132);
        assert_eq!(ledger.quantity(Zone::Tower), 0);
        ledger.verify_conservation().unwrap();
    }

    #[test]
    fn test_move_updates_both_zones() {
        let mut ledger = ledger();
        let tiles = TileCount::single(TileColor::Red, 3).with(TileColor::Blue, 1);

        ledger.move_tiles(Zone::Bag, Zone::Supply, &tiles).unwrap();

        assert_eq!(ledger.view(Zone::Supply), &tiles);
        assert_eq!(ledger.view(Zone::Bag).get(TileColor::Red), 19);
        assert_eq!(ledger.quantity(Zone::Bag), 128);
        ledger.verify_conservation().unwrap();
    }

    #[test]
    fn test_move_refuses_underflow_without_mutating() {
        let mut ledger = ledger();
        let tiles = TileCount::single(TileColor::Green, 1);

        let err = ledger
            .move_tiles(Zone::Tower, Zone::Bag, &tiles)
            .unwrap_err();

        assert_eq!(
            err,
            EngineError::ZoneUnderflow {
                zone: Zone::Tower,
                color: TileColor::Green,
            }
        );
        assert_eq!(ledger.quantity(Zone::Bag), 132);
        ledger.verify_conservation().unwrap();
    }

    #[test]
    fn test_conservation_audit_catches_tampering() {
        let mut ledger = ledger();
        let row = ledger.layout.index(Zone::Bag);
        ledger.rows[row] = TileCount::new([22, 22, 22, 22, 22, 21]);

        assert_eq!(
            ledger.verify_conservation(),
            Err(EngineError::Conservation {
                color: TileColor::Purple,
                found: 21,
                expected: 22,
            })
        );
    }

    #[test]
    fn test_display_and_center_emptiness() {
        let mut ledger = ledger();
        assert!(ledger.displays_and_center_empty());

        let tile = TileCount::single(TileColor::Orange, 1);
        ledger.move_tiles(Zone::Bag, Zone::Display(3), &tile).unwrap();
        assert!(!ledger.displays_and_center_empty());

        ledger
            .move_tiles(Zone::Display(3), Zone::TableCenter, &tile)
            .unwrap();
        assert!(!ledger.displays_and_center_empty());

        ledger
            .move_tiles(Zone::TableCenter, Zone::Hand(PlayerId::new(0)), &tile)
            .unwrap();
        assert!(ledger.displays_and_center_empty());
    }

    #[test]
    fn test_supply_deficit() {
        let mut ledger = ledger();
        assert_eq!(ledger.supply_deficit(), 10);

        ledger
            .move_tiles(Zone::Bag, Zone::Supply, &TileCount::single(TileColor::Red, 4))
            .unwrap();
        assert_eq!(ledger.supply_deficit(), 6);
    }

    #[test]
    fn test_player_zones_are_per_player() {
        let mut ledger = ledger();
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);
        let tile = TileCount::single(TileColor::Yellow, 2);

        ledger.move_tiles(Zone::Bag, Zone::Hand(p0), &tile).unwrap();

        assert_eq!(ledger.quantity(Zone::Hand(p0)), 2);
        assert_eq!(ledger.quantity(Zone::Hand(p1)), 0);
    }
}
