use std::{
    cell::RefCell,
    collections::VecDeque,
    rc::{Rc, Weak},
};

use crate::input::event::InputEvent;

/// Pull-based supplier of input events.
///
/// The driver drains a source once per frame; hosts decide how events get
/// into it (scripted sequences for tests, a shared queue for live bindings).
pub trait EventSource {
    /// Pop the next pending event, oldest first.
    fn next_event(&mut self) -> Option<InputEvent>;
}

/// A fixed sequence of events, drained front to back.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    events: VecDeque<InputEvent>,
}

impl ScriptedSource {
    /// Build a source from events in arrival order.
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Append an event at the back.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }
}

impl EventSource for ScriptedSource {
    fn next_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}

/// A shared single-threaded queue fed by [`EventHandle`]s.
///
/// Handles hold a weak reference, so a dropped queue turns pushes into
/// no-ops instead of keeping the buffer alive.
#[derive(Debug, Default)]
pub struct QueueSource {
    queue: Rc<RefCell<VecDeque<InputEvent>>>,
}

impl QueueSource {
    /// Build an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a producer handle for host callbacks.
    pub fn handle(&self) -> EventHandle {
        EventHandle {
            queue: Rc::downgrade(&self.queue),
        }
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Whether no events are pending.
    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

impl EventSource for QueueSource {
    fn next_event(&mut self) -> Option<InputEvent> {
        self.queue.borrow_mut().pop_front()
    }
}

/// Producer side of a [`QueueSource`].
#[derive(Clone, Debug)]
pub struct EventHandle {
    queue: Weak<RefCell<VecDeque<InputEvent>>>,
}

impl EventHandle {
    /// Enqueue an event. Returns `false` when the queue is gone.
    pub fn push(&self, event: InputEvent) -> bool {
        match self.queue.upgrade() {
            Some(queue) => {
                queue.borrow_mut().push_back(event);
                true
            }
            None => false,
        }
    }
}
