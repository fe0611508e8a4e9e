//! Mutable per-session game state.
//!
//! `GameState` owns everything a handler may touch: the ledger, the boards
//! and their bonus trackers, scores, the draw service, and the phase, round,
//! and turn-order bookkeeping. External readers only ever see it behind a
//! shared reference.

use crate::board::{BonusTracker, PlayerBoard};
use crate::core::{
    DrawRng, Phase, PlayerId, PlayerMap, SessionConfig, TileColor, TileCount, EngineError,
    INITIAL_SCORE, WILD_ROUND_ORDER,
};
use crate::dispatch::{Event, MessageQueue};
use crate::ledger::{Ledger, Zone};

/// All mutable state of one game.
#[derive(Debug)]
pub struct GameState {
    config: SessionConfig,
    /// Tile location matrix, the single source of truth for tiles.
    pub ledger: Ledger,
    /// Placement grid per player.
    pub boards: PlayerMap<PlayerBoard>,
    /// Fire-once bonus groups per player.
    pub bonuses: PlayerMap<BonusTracker>,
    /// Scores, indexed by player.
    pub scores: PlayerMap<u16>,
    /// Deterministic draw service.
    pub rng: DrawRng,
    /// Current phase.
    pub phase: Phase,
    /// Current round, 1-based; 0 before the game starts.
    pub round: u8,
    wild_index: u8,
    /// Whose turn it is.
    pub current_player: PlayerId,
    /// Who opens the current round's phases.
    pub start_player: PlayerId,
    /// Whether the table center has been drawn from this round.
    pub center_claimed: bool,
    /// Players still placing this phase.
    pub active: PlayerMap<bool>,
    /// The winner, set by end-of-game scoring.
    pub winner: Option<PlayerId>,
}

impl GameState {
    /// Fresh state for a validated configuration.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let players = config.player_count();
        Self {
            config,
            ledger: Ledger::new(&config),
            boards: PlayerMap::new(players, |_| PlayerBoard::new()),
            bonuses: PlayerMap::new(players, |_| BonusTracker::new()),
            scores: PlayerMap::with_value(players, INITIAL_SCORE),
            rng: DrawRng::new(config.seed()),
            phase: Phase::AcquireTile,
            round: 0,
            wild_index: 0,
            current_player: PlayerId::new(0),
            start_player: PlayerId::new(0),
            center_claimed: false,
            active: PlayerMap::with_value(players, true),
            winner: None,
        }
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Number of players at the table.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.config.player_count()
    }

    /// This round's wild color.
    #[must_use]
    pub fn wild_color(&self) -> TileColor {
        WILD_ROUND_ORDER[self.wild_index as usize]
    }

    /// Rotate the wild color for the next round.
    pub fn advance_wild(&mut self) {
        self.wild_index = (self.wild_index + 1) % WILD_ROUND_ORDER.len() as u8;
    }

    /// Move the turn to the next player in seating order.
    pub fn advance_player(&mut self) {
        self.current_player = self.current_player.next(self.player_count());
    }

    /// The next active player after `player` in seating order, wrapping and
    /// including `player` itself; `None` once everyone has passed.
    #[must_use]
    pub fn next_active_after(&self, player: PlayerId) -> Option<PlayerId> {
        let n = self.player_count();
        let mut candidate = player;
        for _ in 0..n {
            candidate = candidate.next(n);
            if self.active[candidate] {
                return Some(candidate);
            }
        }
        None
    }

    /// True while any player is still placing.
    #[must_use]
    pub fn any_active(&self) -> bool {
        self.active.iter().any(|(_, &active)| active)
    }

    /// Add points to a player's score.
    pub fn add_score(&mut self, player: PlayerId, points: u16) {
        self.scores[player] += points;
    }

    /// Deduct points, flooring the score at zero.
    ///
    /// Returns the amount actually deducted.
    pub fn sub_score(&mut self, player: PlayerId, points: u16) -> u16 {
        let deducted = points.min(self.scores[player]);
        self.scores[player] -= deducted;
        deducted
    }

    /// Draw `n` tiles from the Bag into `dest`.
    ///
    /// If the Bag holds fewer than `n`, its entire contents move to `dest`
    /// first and the Tower's discards are reclaimed into the Bag before the
    /// remainder is sampled. If Bag and Tower together cannot cover `n`, the
    /// destination is under-filled: callers inspect the returned count, the
    /// shortage is not an error.
    pub fn draw_from_bag(
        &mut self,
        n: u8,
        dest: Zone,
        queue: &mut MessageQueue,
    ) -> Result<TileCount, EngineError> {
        let mut moved = TileCount::EMPTY;
        let mut need = u16::from(n);

        if self.ledger.quantity(Zone::Bag) < need {
            let bag = *self.ledger.view(Zone::Bag);
            if !bag.is_empty() {
                self.ledger.move_tiles(Zone::Bag, dest, &bag)?;
                moved += &bag;
                need -= bag.total();
            }
            let tower = *self.ledger.view(Zone::Tower);
            if !tower.is_empty() {
                self.ledger.move_tiles(Zone::Tower, Zone::Bag, &tower)?;
                queue.enqueue_event(Event::BagRefilledFromTower { tiles: tower });
            }
        }

        let pool = *self.ledger.view(Zone::Bag);
        let take = need.min(pool.total());
        if take > 0 {
            let drawn = self.rng.sample(&pool, take);
            self.ledger.move_tiles(Zone::Bag, dest, &drawn)?;
            moved += &drawn;
        }
        Ok(moved)
    }
}
