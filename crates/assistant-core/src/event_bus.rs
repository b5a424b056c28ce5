//! Session to UI notification queue.
//!
//! The session is the only writer: it pushes one event per transcript append
//! and per turn transition. The UI drains the queue once per frame and
//! replays it onto its snapshot, so after every drain the snapshot equals
//! the session transcript. Single-threaded (WASM), shared through `Rc`.

use std::cell::RefCell;
use std::rc::Rc;
use assistant_types::event::AssistantEvent;

#[derive(Clone, Default)]
pub struct EventBus {
    queue: Rc<RefCell<Vec<AssistantEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn emit(&self, event: AssistantEvent) {
        self.queue.borrow_mut().push(event);
    }

    /// Take everything emitted since the last drain, oldest first.
    pub fn drain(&self) -> Vec<AssistantEvent> {
        std::mem::take(&mut *self.queue.borrow_mut())
    }
}
