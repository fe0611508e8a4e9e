//! FIFO message queues.
//!
//! Two queues, actions and events, processed synchronously and
//! single-threaded. Handlers never call each other directly: all sequencing
//! flows through the queues, so the dispatch history stays flat and
//! inspectable.

use std::collections::VecDeque;

use super::action::Action;
use super::event::Event;

/// The session's pending actions and events.
#[derive(Clone, Debug, Default)]
pub struct MessageQueue {
    actions: VecDeque<Action>,
    events: VecDeque<Event>,
}

impl MessageQueue {
    /// An empty queue pair.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an action at the back.
    pub fn enqueue_action(&mut self, action: Action) {
        self.actions.push_back(action);
    }

    /// Enqueue an event at the back.
    pub fn enqueue_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Dequeue the next action.
    pub fn pop_action(&mut self) -> Option<Action> {
        self.actions.pop_front()
    }

    /// Dequeue the next event.
    pub fn pop_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Pending action count.
    #[must_use]
    pub fn pending_actions(&self) -> usize {
        self.actions.len()
    }

    /// Pending event count.
    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }
}

/// The only channel event handlers may write to.
///
/// Event handlers observe state and may raise further events; they can never
/// enqueue actions, so telemetry cannot mutate gameplay.
#[derive(Debug, Default)]
pub struct EventSink {
    raised: Vec<Event>,
}

impl EventSink {
    /// Raise a follow-up event.
    pub fn raise(&mut self, event: Event) {
        self.raised.push(event);
    }

    /// Consume the sink, yielding raised events in order.
    #[must_use]
    pub fn into_events(self) -> Vec<Event> {
        self.raised
    }
}
