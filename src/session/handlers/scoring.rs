//! End-of-game scoring.

use crate::core::{Phase, PlayerId, StarColor, EngineError};
use crate::dispatch::{Action, Event};
use crate::ledger::Zone;
use crate::session::TurnContext;

/// Points for completing all six slots of a star.
#[must_use]
pub fn star_completion_value(star: StarColor) -> u16 {
    match star {
        StarColor::Wild => 12,
        StarColor::Red => 14,
        StarColor::Blue => 15,
        StarColor::Yellow => 16,
        StarColor::Orange => 17,
        StarColor::Green => 18,
        StarColor::Purple => 20,
    }
}

/// Points for covering a cost value on all seven stars; only 1 through 4
/// are worth anything.
#[must_use]
pub fn coverage_value(slot: u8) -> u16 {
    match slot {
        1 => 4,
        2 => 8,
        3 => 12,
        4 => 16,
        _ => 0,
    }
}

/// Score the finished game and declare the winner.
///
/// Per player: completion bonuses for full stars, coverage bonuses for cost
/// values held on every star, then a point lost per tile still in hand. The
/// winner is the highest score; ties go to the earliest seat.
pub fn end_game(ctx: &mut TurnContext<'_>, _action: Action) -> Result<(), EngineError> {
    let state = &mut *ctx.state;
    state.phase = Phase::GameOver;
    ctx.queue.enqueue_event(Event::PhaseAdvanced {
        phase: Phase::GameOver,
    });

    for player in PlayerId::all(state.player_count()) {
        let board = &state.boards[player];
        let star_bonus: u16 = StarColor::ALL
            .iter()
            .filter(|&&star| board.is_star_complete(star))
            .map(|&star| star_completion_value(star))
            .sum();
        let coverage_bonus: u16 = (1..=4)
            .filter(|&slot| board.covers_slot_value(slot))
            .map(coverage_value)
            .sum();
        state.add_score(player, star_bonus + coverage_bonus);

        let hand = *state.ledger.view(Zone::Hand(player));
        let leftover_penalty = state.sub_score(player, hand.total());
        if !hand.is_empty() {
            state
                .ledger
                .move_tiles(Zone::Hand(player), Zone::Tower, &hand)?;
        }

        ctx.queue.enqueue_event(Event::FinalScoring {
            player,
            star_bonus,
            coverage_bonus,
            leftover_penalty,
            total: state.scores[player],
        });
    }

    let mut winner = PlayerId::new(0);
    for (player, &score) in state.scores.iter() {
        if score > state.scores[winner] {
            winner = player;
        }
    }
    state.winner = Some(winner);

    ctx.queue.enqueue_event(Event::GameEnded {
        winner,
        scores: state.scores.iter().map(|(_, &s)| s).collect(),
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SessionConfig, TileColor, TileCount};
    use crate::dispatch::MessageQueue;
    use crate::session::agent::{Agent, FirstChoice};
    use crate::session::state::GameState;

    fn run_end_game(state: &mut GameState) -> MessageQueue {
        let mut agents: Vec<Box<dyn Agent>> =
            vec![Box::new(FirstChoice), Box::new(FirstChoice)];
        let mut queue = MessageQueue::new();
        let mut ctx = TurnContext {
            state,
            agents: &mut agents,
            queue: &mut queue,
        };
        end_game(&mut ctx, Action::EndGame).unwrap();
        queue
    }

    fn fresh_state() -> GameState {
        GameState::new(SessionConfig::new(2).unwrap())
    }

    #[test]
    fn test_completion_values_match_the_fixed_table() {
        assert_eq!(star_completion_value(StarColor::Wild), 12);
        assert_eq!(star_completion_value(StarColor::Red), 14);
        assert_eq!(star_completion_value(StarColor::Blue), 15);
        assert_eq!(star_completion_value(StarColor::Yellow), 16);
        assert_eq!(star_completion_value(StarColor::Orange), 17);
        assert_eq!(star_completion_value(StarColor::Green), 18);
        assert_eq!(star_completion_value(StarColor::Purple), 20);
    }

    #[test]
    fn test_coverage_values() {
        assert_eq!(coverage_value(1), 4);
        assert_eq!(coverage_value(2), 8);
        assert_eq!(coverage_value(3), 12);
        assert_eq!(coverage_value(4), 16);
        assert_eq!(coverage_value(5), 0);
        assert_eq!(coverage_value(6), 0);
    }

    #[test]
    fn test_complete_star_pays_its_bonus() {
        let mut state = fresh_state();
        let p0 = PlayerId::new(0);
        for slot in 1..=6 {
            state.boards[p0]
                .place(StarColor::Purple, slot, TileColor::Purple)
                .unwrap();
        }

        run_end_game(&mut state);

        assert_eq!(state.scores[p0], 5 + 20);
        assert_eq!(state.winner, Some(p0));
    }

    #[test]
    fn test_coverage_bonus_needs_all_seven_stars() {
        let mut state = fresh_state();
        let p1 = PlayerId::new(1);
        for star in StarColor::ALL {
            let color = star.color().unwrap_or(TileColor::Orange);
            state.boards[p1].place(star, 1, color).unwrap();
        }

        run_end_game(&mut state);

        assert_eq!(state.scores[p1], 5 + 4);
        assert_eq!(state.winner, Some(p1));
    }

    #[test]
    fn test_leftover_hand_tiles_cost_a_point_each() {
        let mut state = fresh_state();
        let p0 = PlayerId::new(0);
        state
            .ledger
            .move_tiles(
                Zone::Bag,
                Zone::Hand(p0),
                &TileCount::single(TileColor::Red, 3),
            )
            .unwrap();

        let mut queue = run_end_game(&mut state);

        assert_eq!(state.scores[p0], 2);
        assert_eq!(state.ledger.quantity(Zone::Hand(p0)), 0);
        assert_eq!(state.ledger.quantity(Zone::Tower), 3);

        let mut saw_final = false;
        while let Some(event) = queue.pop_event() {
            if let Event::FinalScoring {
                player,
                leftover_penalty,
                ..
            } = event
            {
                if player == p0 {
                    assert_eq!(leftover_penalty, 3);
                    saw_final = true;
                }
            }
        }
        assert!(saw_final);
    }

    #[test]
    fn test_tie_breaks_toward_the_earliest_seat() {
        let mut state = fresh_state();

        run_end_game(&mut state);

        // Both players finish on the initial score.
        assert_eq!(state.scores[PlayerId::new(0)], state.scores[PlayerId::new(1)]);
        assert_eq!(state.winner, Some(PlayerId::new(0)));
        assert_eq!(state.phase, Phase::GameOver);
    }
}
