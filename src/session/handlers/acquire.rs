//! Acquisition phase handlers.

use crate::core::EngineError;
use crate::dispatch::{Action, Event};
use crate::ledger::Zone;
use crate::moves::{acquire_draws, DrawSource, LegalMoves};
use crate::session::TurnContext;

/// Run one acquisition turn.
///
/// The phase ends only when every factory display and the table center are
/// simultaneously empty; until then each turn drafts one offer into the
/// current player's hand and rotates the seat.
pub fn acquire_turn(ctx: &mut TurnContext<'_>, _action: Action) -> Result<(), EngineError> {
    if ctx.state.ledger.displays_and_center_empty() {
        ctx.queue.enqueue_action(Action::BeginPlacementPhase);
        return Ok(());
    }

    let state = &mut *ctx.state;
    let player = state.current_player;
    let draws = acquire_draws(&state.ledger, state.wild_color());

    let index = ctx.agents[player.index()].choose(&LegalMoves::Acquire(&draws));
    let draw = draws.get(index).ok_or(EngineError::InvalidMove {
        index,
        len: draws.len(),
    })?;

    state
        .ledger
        .move_tiles(draw.source.zone(), Zone::Hand(player), &draw.tiles)?;
    ctx.queue.enqueue_event(Event::TilesAcquired {
        player,
        source: draw.source,
        tiles: draw.tiles,
    });

    match draw.source {
        DrawSource::TableCenter => {
            // The round's first center draw claims the next start player and
            // costs a point per tile taken. Display draws never pay this.
            if !state.center_claimed {
                state.center_claimed = true;
                state.start_player = player;
                let penalty = state.sub_score(player, draw.tiles.total());
                ctx.queue
                    .enqueue_event(Event::StartPlayerClaimed { player, penalty });
            }
        }
        DrawSource::Display(n) => {
            let rest = *state.ledger.view(Zone::Display(n));
            if !rest.is_empty() {
                state
                    .ledger
                    .move_tiles(Zone::Display(n), Zone::TableCenter, &rest)?;
                ctx.queue.enqueue_event(Event::DisplayRemainderDiscarded {
                    display: n,
                    tiles: rest,
                });
            }
        }
    }

    state.advance_player();
    ctx.queue.enqueue_action(Action::AcquireTurn);
    Ok(())
}
