//! Action and event handlers for the standard rules.
//!
//! Each handler applies one action's mutation and enqueues whatever comes
//! next; sequencing flows only through the queues. `register_defaults` wires
//! the full rule set plus a tracing observer for every event tag, giving a
//! registry that passes construction-time validation as-is.

pub mod acquire;
pub mod placement;
pub mod round;
pub mod scoring;

use tracing::debug;

use crate::dispatch::{Action, Event, EventSink, EventTag, HandlerRegistry};
use crate::session::state::GameState;

pub use scoring::{coverage_value, star_completion_value};

/// Register the standard rule handlers and default event observers.
pub fn register_defaults(registry: &mut HandlerRegistry) {
    registry.register_action(Action::StartGame, round::start_game);
    registry.register_action(Action::FillSupply, round::fill_supply);
    registry.register_action(Action::FillFactoryDisplays, round::fill_factory_displays);
    registry.register_action(Action::AcquireTurn, acquire::acquire_turn);
    registry.register_action(Action::BeginPlacementPhase, placement::begin_placement_phase);
    registry.register_action(Action::PlacementTurn, placement::placement_turn);
    registry.register_action(Action::PrepareNextRound, round::prepare_next_round);
    registry.register_action(Action::EndGame, scoring::end_game);

    for tag in EventTag::ALL {
        registry.register_event(tag, log_event);
    }
}

/// Default event observer: telemetry only.
fn log_event(_state: &GameState, event: &Event, _sink: &mut EventSink) {
    debug!(?event, "event");
}
