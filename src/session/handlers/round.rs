//! Setup and round-boundary handlers.

use crate::core::{Phase, EngineError, FACTORY_DISPLAY_CAP, ROUNDS_PER_GAME};
use crate::dispatch::{Action, Event};
use crate::ledger::Zone;
use crate::session::TurnContext;

/// Initialize round 1 and queue the opening fills.
pub fn start_game(ctx: &mut TurnContext<'_>, _action: Action) -> Result<(), EngineError> {
    let state = &mut *ctx.state;
    state.round = 1;

    ctx.queue.enqueue_event(Event::GameStarted {
        players: state.player_count() as u8,
        seed: state.config().seed(),
    });
    ctx.queue.enqueue_event(Event::RoundPrepared {
        round: state.round,
        wild: state.wild_color(),
    });

    ctx.queue.enqueue_action(Action::FillSupply);
    ctx.queue.enqueue_action(Action::FillFactoryDisplays);
    ctx.queue.enqueue_action(Action::AcquireTurn);
    Ok(())
}

/// Top the Supply up to its cap from the Bag.
pub fn fill_supply(ctx: &mut TurnContext<'_>, _action: Action) -> Result<(), EngineError> {
    let deficit = ctx.state.ledger.supply_deficit();
    let tiles = ctx.state.draw_from_bag(deficit, Zone::Supply, ctx.queue)?;
    ctx.queue.enqueue_event(Event::SupplyFilled { tiles });
    Ok(())
}

/// Top every factory display up to its cap from the Bag.
pub fn fill_factory_displays(
    ctx: &mut TurnContext<'_>,
    _action: Action,
) -> Result<(), EngineError> {
    let displays = ctx.state.ledger.layout().displays();
    for n in 0..displays {
        let held = ctx.state.ledger.quantity(Zone::Display(n));
        let deficit = u16::from(FACTORY_DISPLAY_CAP).saturating_sub(held) as u8;
        let tiles = ctx
            .state
            .draw_from_bag(deficit, Zone::Display(n), ctx.queue)?;
        ctx.queue
            .enqueue_event(Event::FactoryDisplayFilled { display: n, tiles });
    }
    Ok(())
}

/// Close the round: rotate the wild color and re-enter acquisition, or hand
/// off to end-of-game scoring after the final round.
pub fn prepare_next_round(ctx: &mut TurnContext<'_>, _action: Action) -> Result<(), EngineError> {
    let state = &mut *ctx.state;
    state.phase = Phase::PrepareNextRound;
    ctx.queue.enqueue_event(Event::PhaseAdvanced {
        phase: Phase::PrepareNextRound,
    });

    if state.round >= ROUNDS_PER_GAME {
        ctx.queue.enqueue_action(Action::EndGame);
        return Ok(());
    }

    state.round += 1;
    state.advance_wild();
    // The round's first center draw fixed the new start player; the claim
    // tracker resets for the round about to begin.
    state.center_claimed = false;
    state.current_player = state.start_player;
    state.phase = Phase::AcquireTile;

    ctx.queue.enqueue_event(Event::RoundPrepared {
        round: state.round,
        wild: state.wild_color(),
    });
    ctx.queue.enqueue_event(Event::PhaseAdvanced {
        phase: Phase::AcquireTile,
    });

    ctx.queue.enqueue_action(Action::FillSupply);
    ctx.queue.enqueue_action(Action::FillFactoryDisplays);
    ctx.queue.enqueue_action(Action::AcquireTurn);
    Ok(())
}
