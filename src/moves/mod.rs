//! Legal-move enumeration.
//!
//! Both generators produce finite, order-stable, eagerly materialized lists;
//! player collaborators answer with an index into the list, so ordering is
//! part of the contract.
//!
//! ## Acquisition draws
//!
//! Per factory display (index ascending) and then the table center, per
//! color in column order: an offer of every tile of that color in the zone,
//! plus exactly one wild tile if any wilds sit alongside it. The wild color
//! itself produces no per-color offer, except in a zone holding nothing but
//! wilds, which offers a single wild tile from that same zone.
//!
//! ## Board placements
//!
//! For each color in hand, every affordable (color, wild) payment pair in
//! descending color-spent then descending wild-spent order, targeting the
//! matching color star and, where permitted, the Wild star. The wild color
//! pays only with itself.

use serde::{Deserialize, Serialize};

use crate::board::PlayerBoard;
use crate::core::{StarColor, TileColor, TileCount, SLOTS_PER_STAR};
use crate::ledger::{Ledger, Zone};

/// Where an acquisition draw takes its tiles from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawSource {
    /// Factory display `n`, 0-based.
    Display(u8),
    /// The shared table center.
    TableCenter,
}

impl DrawSource {
    /// The ledger zone this source reads from.
    #[must_use]
    pub fn zone(self) -> Zone {
        match self {
            DrawSource::Display(n) => Zone::Display(n),
            DrawSource::TableCenter => Zone::TableCenter,
        }
    }
}

impl std::fmt::Display for DrawSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawSource::Display(n) => write!(f, "Display {n}"),
            DrawSource::TableCenter => f.write_str("TableCenter"),
        }
    }
}

/// A candidate acquisition move: take `tiles` from `source`.
///
/// Regenerated every turn from ledger state, never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPosition {
    pub source: DrawSource,
    pub tiles: TileCount,
}

/// A candidate placement move: pay `cost` from hand to put one tile of
/// `color` on `star` at `slot`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardPlacement {
    pub star: StarColor,
    pub slot: u8,
    pub color: TileColor,
    pub cost: TileCount,
}

/// One option in the placement phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementMove {
    Place(BoardPlacement),
    /// Stop placing for the rest of the phase, discarding the hand.
    Pass,
}

/// The list handed to a player collaborator for one decision.
#[derive(Clone, Copy, Debug)]
pub enum LegalMoves<'a> {
    Acquire(&'a [DrawPosition]),
    Place(&'a [PlacementMove]),
}

impl LegalMoves<'_> {
    /// Number of selectable moves.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            LegalMoves::Acquire(draws) => draws.len(),
            LegalMoves::Place(moves) => moves.len(),
        }
    }

    /// True if there is nothing to choose.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn draws_from_zone(
    source: DrawSource,
    tiles: &TileCount,
    wild: TileColor,
    out: &mut Vec<DrawPosition>,
) {
    if tiles.is_empty() {
        return;
    }
    let wild_bonus = tiles.get(wild).min(1);
    for color in TileColor::ALL {
        let count = tiles.get(color);
        if count == 0 {
            continue;
        }
        if color != wild {
            out.push(DrawPosition {
                source,
                tiles: TileCount::single(color, count).with(wild, wild_bonus),
            });
        } else if tiles.total() == u16::from(count) {
            // Nothing but wilds here: a single wild may be taken.
            out.push(DrawPosition {
                source,
                tiles: TileCount::single(wild, 1),
            });
        }
    }
}

/// Enumerate every legal acquisition draw for the current ledger state.
///
/// Order: display index ascending, color order within each zone, table
/// center entries last.
#[must_use]
pub fn acquire_draws(ledger: &Ledger, wild: TileColor) -> Vec<DrawPosition> {
    let mut out = Vec::new();
    for (n, tiles) in ledger.displays() {
        draws_from_zone(DrawSource::Display(n), tiles, wild, &mut out);
    }
    draws_from_zone(
        DrawSource::TableCenter,
        ledger.view(Zone::TableCenter),
        wild,
        &mut out,
    );
    out
}

fn placements_for_color(
    color: TileColor,
    color_held: u8,
    wild_held: u8,
    wild: TileColor,
    board: &PlayerBoard,
    out: &mut Vec<BoardPlacement>,
) {
    for color_spent in (1..=color_held).rev() {
        for wild_spent in (0..=wild_held).rev() {
            let slot = color_spent + wild_spent;
            if slot > SLOTS_PER_STAR {
                continue;
            }
            let cost = TileCount::single(color, color_spent).with(wild, wild_spent);

            if board.is_open(color.star(), slot) {
                out.push(BoardPlacement {
                    star: color.star(),
                    slot,
                    color,
                    cost,
                });
            }
            if board.is_open(StarColor::Wild, slot) && !board.has_wild_color(color) {
                out.push(BoardPlacement {
                    star: StarColor::Wild,
                    slot,
                    color,
                    cost,
                });
            }
        }
    }
}

/// Enumerate every legal board placement for `hand` against `board`.
#[must_use]
pub fn board_placements(
    hand: &TileCount,
    wild: TileColor,
    board: &PlayerBoard,
) -> Vec<BoardPlacement> {
    let mut out = Vec::new();
    let wild_held = hand.get(wild);
    for color in TileColor::ALL {
        let held = hand.get(color);
        if held == 0 {
            continue;
        }
        // The wild color pays only with itself.
        let wild_budget = if color == wild { 0 } else { wild_held };
        placements_for_color(color, held, wild_budget, wild, board, &mut out);
    }
    out
}

/// Placement options plus the explicit trailing Pass.
#[must_use]
pub fn placement_moves(
    hand: &TileCount,
    wild: TileColor,
    board: &PlayerBoard,
) -> Vec<PlacementMove> {
    let mut moves: Vec<PlacementMove> = board_placements(hand, wild, board)
        .into_iter()
        .map(PlacementMove::Place)
        .collect();
    moves.push(PlacementMove::Pass);
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SessionConfig;

    const WILD: TileColor = TileColor::Purple;

    fn ledger_with(zones: &[(Zone, TileCount)]) -> Ledger {
        let mut ledger = Ledger::new(&SessionConfig::new(2).unwrap());
        for (zone, tiles) in zones {
            ledger.move_tiles(Zone::Bag, *zone, tiles).unwrap();
        }
        ledger
    }

    #[test]
    fn test_draws_offer_whole_color_plus_one_wild() {
        let display = TileCount::single(TileColor::Red, 2)
            .with(TileColor::Blue, 1)
            .with(WILD, 1);
        let ledger = ledger_with(&[(Zone::Display(0), display)]);

        let draws = acquire_draws(&ledger, WILD);

        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0].source, DrawSource::Display(0));
        assert_eq!(
            draws[0].tiles,
            TileCount::single(TileColor::Red, 2).with(WILD, 1)
        );
        assert_eq!(
            draws[1].tiles,
            TileCount::single(TileColor::Blue, 1).with(WILD, 1)
        );
    }

    #[test]
    fn test_draws_without_wild_present() {
        let ledger = ledger_with(&[(Zone::Display(1), TileCount::single(TileColor::Green, 4))]);
        let draws = acquire_draws(&ledger, WILD);

        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].tiles, TileCount::single(TileColor::Green, 4));
    }

    #[test]
    fn test_all_wild_display_offers_single_wild_from_the_display() {
        let ledger = ledger_with(&[(Zone::Display(2), TileCount::single(WILD, 3))]);
        let draws = acquire_draws(&ledger, WILD);

        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].source, DrawSource::Display(2));
        assert_eq!(draws[0].tiles, TileCount::single(WILD, 1));
    }

    #[test]
    fn test_mixed_zone_emits_no_offer_for_the_wild_color_itself() {
        let display = TileCount::single(TileColor::Red, 1).with(WILD, 2);
        let ledger = ledger_with(&[(Zone::Display(0), display)]);

        let draws = acquire_draws(&ledger, WILD);

        assert_eq!(draws.len(), 1);
        assert_eq!(
            draws[0].tiles,
            TileCount::single(TileColor::Red, 1).with(WILD, 1)
        );
    }

    #[test]
    fn test_draw_order_displays_then_center() {
        let ledger = ledger_with(&[
            (Zone::Display(0), TileCount::single(TileColor::Blue, 2)),
            (Zone::Display(3), TileCount::single(TileColor::Orange, 1)),
            (Zone::TableCenter, TileCount::single(TileColor::Red, 2)),
        ]);

        let draws = acquire_draws(&ledger, WILD);

        assert_eq!(draws.len(), 3);
        assert_eq!(draws[0].source, DrawSource::Display(0));
        assert_eq!(draws[1].source, DrawSource::Display(3));
        assert_eq!(draws[2].source, DrawSource::TableCenter);
    }

    #[test]
    fn test_every_draw_references_live_tiles() {
        let ledger = ledger_with(&[
            (Zone::Display(0), TileCount::single(TileColor::Red, 3).with(WILD, 1)),
            (Zone::TableCenter, TileCount::single(WILD, 2)),
        ]);

        for draw in acquire_draws(&ledger, WILD) {
            let zone = draw.source.zone();
            assert!(
                ledger.view(zone).checked_sub(&draw.tiles).is_some(),
                "draw {draw:?} overdraws {zone}"
            );
        }
    }

    #[test]
    fn test_placements_single_color_all_slots() {
        let board = PlayerBoard::new();
        let hand = TileCount::single(TileColor::Blue, 7);

        let placements = board_placements(&hand, WILD, &board);

        // 6 affordable slots on the Blue star, each also targeting Wild.
        assert_eq!(placements.len(), 12);
        assert_eq!(placements[0].star, StarColor::Blue);
        assert_eq!(placements[0].slot, 6);
        assert_eq!(placements[0].cost, TileCount::single(TileColor::Blue, 6));
        assert_eq!(placements[1].star, StarColor::Wild);
    }

    #[test]
    fn test_placements_descending_color_then_wild() {
        let board = PlayerBoard::new();
        let hand = TileCount::single(TileColor::Red, 2).with(WILD, 1);

        let placements = board_placements(&hand, WILD, &board);
        let red_star: Vec<_> = placements
            .iter()
            .filter(|p| p.star == StarColor::Red)
            .map(|p| (p.cost.get(TileColor::Red), p.cost.get(WILD)))
            .collect();

        assert_eq!(red_star, vec![(2, 1), (2, 0), (1, 1), (1, 0)]);
    }

    #[test]
    fn test_placement_skips_occupied_slots() {
        let mut board = PlayerBoard::new();
        board.place(StarColor::Red, 2, TileColor::Red).unwrap();
        let hand = TileCount::single(TileColor::Red, 2);

        let placements = board_placements(&hand, WILD, &board);

        assert!(placements
            .iter()
            .all(|p| !(p.star == StarColor::Red && p.slot == 2)));
    }

    #[test]
    fn test_wild_star_excludes_repeated_color() {
        let mut board = PlayerBoard::new();
        board.place(StarColor::Wild, 1, TileColor::Red).unwrap();
        let hand = TileCount::single(TileColor::Red, 2).with(TileColor::Blue, 1);

        let placements = board_placements(&hand, WILD, &board);

        assert!(placements
            .iter()
            .filter(|p| p.star == StarColor::Wild)
            .all(|p| p.color == TileColor::Blue));
    }

    #[test]
    fn test_wild_color_pays_only_with_itself() {
        let board = PlayerBoard::new();
        let hand = TileCount::single(WILD, 3).with(TileColor::Green, 1);

        let placements = board_placements(&hand, WILD, &board);
        let wild_color_costs: Vec<_> = placements
            .iter()
            .filter(|p| p.color == WILD)
            .map(|p| p.cost)
            .collect();

        assert!(!wild_color_costs.is_empty());
        for cost in wild_color_costs {
            assert_eq!(u16::from(cost.get(WILD)), cost.total());
        }
        // The non-wild color may still spend wilds.
        assert!(placements
            .iter()
            .any(|p| p.color == TileColor::Green && p.cost.get(WILD) > 0));
    }

    #[test]
    fn test_cost_never_exceeds_six() {
        let board = PlayerBoard::new();
        let hand = TileCount::single(TileColor::Orange, 6).with(WILD, 6);

        for placement in board_placements(&hand, WILD, &board) {
            assert!(placement.cost.total() <= 6);
            assert_eq!(u16::from(placement.slot), placement.cost.total());
        }
    }

    #[test]
    fn test_placement_moves_end_with_pass() {
        let board = PlayerBoard::new();
        let moves = placement_moves(&TileCount::EMPTY, WILD, &board);
        assert_eq!(moves, vec![PlacementMove::Pass]);

        let moves = placement_moves(&TileCount::single(TileColor::Red, 1), WILD, &board);
        assert!(moves.len() > 1);
        assert_eq!(moves.last(), Some(&PlacementMove::Pass));
    }
}
