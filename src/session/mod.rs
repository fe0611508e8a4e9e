//! The session aggregate and its play loop.
//!
//! A `Session` owns all per-game mutable state, the player collaborators,
//! the handler registry, the message queues, and the ordered event log. It
//! is single-threaded and cooperative: every mutation happens synchronously
//! inside the dispatch loop, and the only suspension point is the
//! synchronous `choose` call into an [`Agent`].
//!
//! ## Dispatch loop
//!
//! `run` enqueues the opening action and then repeats dequeue-and-dispatch
//! until the action queue drains. After each action handler, raised events
//! are appended to the log and offered to their observers. Termination is
//! guaranteed because the game-over handler is the only one that stops
//! re-enqueuing turn actions. A fatal error aborts immediately; the log up
//! to that point stays readable.

pub mod agent;
pub mod handlers;
pub mod state;

pub use agent::{Agent, FirstChoice, RandomChoice};
pub use state::GameState;

use im::Vector;
use tracing::{debug, error};

use crate::core::{EngineError, PlayerId, PlayerMap, SessionConfig};
use crate::dispatch::{Action, EventRecord, EventSink, HandlerRegistry, MessageQueue};

/// What an action handler may reach during one dispatch.
pub struct TurnContext<'a> {
    /// All mutable game state.
    pub state: &'a mut GameState,
    /// Player collaborators, indexed by seat.
    pub agents: &'a mut [Box<dyn Agent>],
    /// The queues; the only way to sequence further work.
    pub queue: &'a mut MessageQueue,
}

/// One game from construction to winner.
pub struct Session {
    state: GameState,
    agents: Vec<Box<dyn Agent>>,
    registry: HandlerRegistry,
    queue: MessageQueue,
    log: Vector<EventRecord>,
    next_seq: u32,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("agents", &self.agents.len())
            .field("log_len", &self.log.len())
            .field("next_seq", &self.next_seq)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Build a session with the standard rule handlers.
    ///
    /// `agents` must supply one collaborator per configured seat.
    pub fn new(
        config: SessionConfig,
        agents: Vec<Box<dyn Agent>>,
    ) -> Result<Self, EngineError> {
        let mut registry = HandlerRegistry::new();
        handlers::register_defaults(&mut registry);
        Self::with_registry(config, agents, registry)
    }

    /// Build a session around a caller-assembled registry.
    ///
    /// The registry is validated here, before the first dispatch: a missing
    /// handler for any action or event tag is a configuration error.
    pub fn with_registry(
        config: SessionConfig,
        agents: Vec<Box<dyn Agent>>,
        registry: HandlerRegistry,
    ) -> Result<Self, EngineError> {
        if agents.len() != config.player_count() {
            return Err(EngineError::Configuration(format!(
                "{} agents supplied for {} seats",
                agents.len(),
                config.player_count()
            )));
        }
        registry.validate()?;

        Ok(Self {
            state: GameState::new(config),
            agents,
            registry,
            queue: MessageQueue::new(),
            log: Vector::new(),
            next_seq: 0,
        })
    }

    /// Play the session to completion and return the winner's seat.
    pub fn run(&mut self) -> Result<PlayerId, EngineError> {
        self.queue.enqueue_action(Action::StartGame);
        self.drain()?;
        self.state.winner.ok_or_else(|| {
            EngineError::Configuration("dispatch drained without declaring a winner".into())
        })
    }

    fn drain(&mut self) -> Result<(), EngineError> {
        while let Some(action) = self.queue.pop_action() {
            debug!(%action, "dispatch");
            let handler = self.registry.action_handler(action).ok_or_else(|| {
                EngineError::Configuration(format!("no handler registered for action {action}"))
            })?;

            let mut ctx = TurnContext {
                state: &mut self.state,
                agents: self.agents.as_mut_slice(),
                queue: &mut self.queue,
            };
            if let Err(err) = handler(&mut ctx, action) {
                error!(%action, %err, "handler failed, aborting session");
                self.record_pending_events();
                return Err(err);
            }

            self.record_pending_events();
        }
        Ok(())
    }

    /// Drain the event queue into the log and its observers.
    fn record_pending_events(&mut self) {
        while let Some(event) = self.queue.pop_event() {
            self.log
                .push_back(EventRecord::new(self.next_seq, event.clone()));
            self.next_seq += 1;

            let mut sink = EventSink::default();
            for handler in self.registry.event_handlers(event.tag()) {
                handler(&self.state, &event, &mut sink);
            }
            for raised in sink.into_events() {
                self.queue.enqueue_event(raised);
            }
        }
    }

    /// Read-only view of the game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current scores, indexed by seat.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u16> {
        &self.state.scores
    }

    /// Snapshot of the ordered event log.
    ///
    /// The log is persistent, so the snapshot is cheap and unaffected by
    /// further play.
    #[must_use]
    pub fn event_log(&self) -> Vector<EventRecord> {
        self.log.clone()
    }

    /// The winner, once end-of-game scoring has run.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner
    }
}
