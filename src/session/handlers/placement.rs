//! Placement phase handlers.

use crate::core::{Phase, PlayerId, TileCount, EngineError};
use crate::dispatch::{Action, Event, MessageQueue};
use crate::ledger::Zone;
use crate::moves::{placement_moves, BoardPlacement, LegalMoves, PlacementMove};
use crate::session::state::GameState;
use crate::session::TurnContext;

/// Enter the placement phase: everyone active, start player to act first.
pub fn begin_placement_phase(
    ctx: &mut TurnContext<'_>,
    _action: Action,
) -> Result<(), EngineError> {
    let state = &mut *ctx.state;
    state.phase = Phase::PlayTiles;
    for player in PlayerId::all(state.player_count()) {
        state.active[player] = true;
    }
    state.current_player = state.start_player;

    ctx.queue.enqueue_event(Event::PhaseAdvanced {
        phase: Phase::PlayTiles,
    });
    ctx.queue.enqueue_action(Action::PlacementTurn);
    Ok(())
}

/// Run one placement turn.
///
/// The phase ends only when every player has passed for its remainder. A
/// turn either pays for one placement or passes, discarding the hand to the
/// Tower at a point per tile.
pub fn placement_turn(ctx: &mut TurnContext<'_>, _action: Action) -> Result<(), EngineError> {
    if !ctx.state.any_active() {
        ctx.queue.enqueue_action(Action::PrepareNextRound);
        return Ok(());
    }

    let state = &mut *ctx.state;
    let player = state.current_player;
    let hand = *state.ledger.view(Zone::Hand(player));
    let moves = placement_moves(&hand, state.wild_color(), &state.boards[player]);

    let index = ctx.agents[player.index()].choose(&LegalMoves::Place(&moves));
    let chosen = moves.get(index).ok_or(EngineError::InvalidMove {
        index,
        len: moves.len(),
    })?;

    match chosen {
        PlacementMove::Pass => {
            if !hand.is_empty() {
                state
                    .ledger
                    .move_tiles(Zone::Hand(player), Zone::Tower, &hand)?;
            }
            let penalty = state.sub_score(player, hand.total());
            state.active[player] = false;
            ctx.queue.enqueue_event(Event::PlayerPassed {
                player,
                discarded: hand,
                penalty,
            });
        }
        PlacementMove::Place(placement) => {
            apply_placement(state, player, placement, ctx.queue)?;
        }
    }

    if let Some(next) = state.next_active_after(player) {
        state.current_player = next;
    }
    ctx.queue.enqueue_action(Action::PlacementTurn);
    Ok(())
}

/// Pay for one placement: board cell, ledger moves, adjacency points, and
/// any bonus groups the new tile completes.
fn apply_placement(
    state: &mut GameState,
    player: PlayerId,
    placement: &BoardPlacement,
    queue: &mut MessageQueue,
) -> Result<(), EngineError> {
    let board_tile = TileCount::single(placement.color, 1);
    let spill = placement
        .cost
        .checked_sub(&board_tile)
        .ok_or(EngineError::InvalidPlacement {
            star: placement.star,
            slot: placement.slot,
        })?;

    let points = state.boards[player].place(placement.star, placement.slot, placement.color)?;

    // One tile lands on the board row; the rest of the payment is spent.
    state.ledger.move_tiles(
        Zone::Hand(player),
        Zone::BoardRow(player, placement.star),
        &board_tile,
    )?;
    if !spill.is_empty() {
        state
            .ledger
            .move_tiles(Zone::Hand(player), Zone::Tower, &spill)?;
    }

    state.add_score(player, points);
    queue.enqueue_event(Event::TilePlaced {
        player,
        star: placement.star,
        slot: placement.slot,
        color: placement.color,
        points,
        cost: placement.cost,
    });

    for group in state.bonuses[player].claim_surrounded(&state.boards[player]) {
        let pool = *state.ledger.view(Zone::Supply);
        let tiles = state.rng.sample(&pool, u16::from(group.grant()));
        if !tiles.is_empty() {
            state
                .ledger
                .move_tiles(Zone::Supply, Zone::Hand(player), &tiles)?;
        }
        queue.enqueue_event(Event::BonusClaimed {
            player,
            kind: group.kind,
            tiles,
        });
    }
    Ok(())
}
