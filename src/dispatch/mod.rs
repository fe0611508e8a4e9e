//! Action/event dispatch.
//!
//! The phase state machine runs on two FIFO queues. Dispatching an action
//! invokes its registered handler; any events the handler raised are then
//! drained, appended to the ordered log, and offered to their event
//! handlers. A session is repeated dequeue-and-dispatch until the action
//! queue is empty, which only happens once the game-over handler stops
//! re-enqueuing turn actions.

pub mod action;
pub mod event;
pub mod queue;
pub mod registry;

pub use action::Action;
pub use event::{Event, EventRecord, EventTag};
pub use queue::{EventSink, MessageQueue};
pub use registry::{ActionHandler, EventHandler, HandlerRegistry};
