//! Handler registration.
//!
//! One explicit registry, built once at session construction and validated
//! there: every action tag needs exactly one handler, every event tag at
//! least one. A tag that would only fail at dispatch time is a configuration
//! error the session refuses to start with.

use rustc_hash::FxHashMap;

use super::action::Action;
use super::event::{Event, EventTag};
use super::queue::EventSink;
use crate::core::EngineError;
use crate::session::state::GameState;
use crate::session::TurnContext;

/// Applies one action to the session.
///
/// Handlers may enqueue further actions and events through the context, but
/// never invoke another handler directly.
pub type ActionHandler = fn(&mut TurnContext<'_>, Action) -> Result<(), EngineError>;

/// Observes one event.
///
/// Receives read-only state and may raise follow-up events; gameplay
/// mutation is structurally out of reach.
pub type EventHandler = fn(&GameState, &Event, &mut EventSink);

/// Tag-keyed handler tables.
pub struct HandlerRegistry {
    actions: FxHashMap<Action, ActionHandler>,
    events: FxHashMap<EventTag, Vec<EventHandler>>,
}

impl HandlerRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: FxHashMap::default(),
            events: FxHashMap::default(),
        }
    }

    /// Register the handler for an action tag, replacing any previous one.
    pub fn register_action(&mut self, tag: Action, handler: ActionHandler) {
        self.actions.insert(tag, handler);
    }

    /// Add a handler for an event tag.
    pub fn register_event(&mut self, tag: EventTag, handler: EventHandler) {
        self.events.entry(tag).or_default().push(handler);
    }

    /// Check that every tag is covered.
    pub fn validate(&self) -> Result<(), EngineError> {
        for tag in Action::ALL {
            if !self.actions.contains_key(&tag) {
                return Err(EngineError::Configuration(format!(
                    "no handler registered for action {tag}"
                )));
            }
        }
        for tag in EventTag::ALL {
            if !self.events.contains_key(&tag) {
                return Err(EngineError::Configuration(format!(
                    "no handler registered for event {tag:?}"
                )));
            }
        }
        Ok(())
    }

    /// Look up an action handler.
    #[must_use]
    pub fn action_handler(&self, tag: Action) -> Option<ActionHandler> {
        self.actions.get(&tag).copied()
    }

    /// Look up the handlers for an event tag.
    #[must_use]
    pub fn event_handlers(&self, tag: EventTag) -> &[EventHandler] {
        self.events.get(&tag).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_action(_: &mut TurnContext<'_>, _: Action) -> Result<(), EngineError> {
        Ok(())
    }

    fn noop_event(_: &GameState, _: &Event, _: &mut EventSink) {}

    #[test]
    fn test_empty_registry_fails_validation() {
        let registry = HandlerRegistry::new();
        let err = registry.validate().unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
    }

    #[test]
    fn test_missing_single_action_is_reported() {
        let mut registry = HandlerRegistry::new();
        for tag in Action::ALL {
            if tag != Action::EndGame {
                registry.register_action(tag, noop_action);
            }
        }
        for tag in EventTag::ALL {
            registry.register_event(tag, noop_event);
        }

        let err = registry.validate().unwrap_err();
        assert_eq!(
            err,
            EngineError::Configuration("no handler registered for action EndGame".into())
        );
    }

    #[test]
    fn test_full_registry_validates() {
        let mut registry = HandlerRegistry::new();
        for tag in Action::ALL {
            registry.register_action(tag, noop_action);
        }
        for tag in EventTag::ALL {
            registry.register_event(tag, noop_event);
        }
        registry.validate().unwrap();

        assert!(registry.action_handler(Action::StartGame).is_some());
        assert_eq!(registry.event_handlers(EventTag::GameEnded).len(), 1);
    }
}
