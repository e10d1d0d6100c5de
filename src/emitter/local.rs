//! In-process emitter with named signals and two dispatch phases.

use crate::emitter::Emitter;
use crate::types::{DispatchPhase, Handler, HandlerId};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A registered handler slot.
struct Slot<A: 'static> {
    id: HandlerId,
    signal: String,
    phase: DispatchPhase,
    handler: Handler<A>,
}

/// A plain in-process emitter.
///
/// Dispatch runs all before-phase handlers for a signal in registration
/// order, then all after-phase handlers. Emission snapshots the slot list
/// first, so a handler removed during the round is still called and a
/// handler added during the round is not called until the next emit.
///
/// Implements both optional liveness capabilities: [`destroy`] marks the
/// emitter dead without involving any registry that references it.
///
/// [`destroy`]: LocalEmitter::destroy
pub struct LocalEmitter<A: 'static> {
    slots: RefCell<Vec<Slot<A>>>,
    next_id: Cell<u64>,
    destroyed: Cell<bool>,
}

impl<A: 'static> LocalEmitter<A> {
    /// Create a new, empty emitter.
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            destroyed: Cell::new(false),
        }
    }

    /// Invoke every handler registered for `signal`.
    pub fn emit(&self, signal: &str, args: &A) {
        if self.destroyed.get() {
            return;
        }

        // Snapshot before invoking; handlers may register/unregister freely.
        let snapshot: Vec<Handler<A>> = {
            let slots = self.slots.borrow();
            let before = slots
                .iter()
                .filter(|s| s.signal == signal && s.phase == DispatchPhase::Before);
            let after = slots
                .iter()
                .filter(|s| s.signal == signal && s.phase == DispatchPhase::After);
            before.chain(after).map(|s| Rc::clone(&s.handler)).collect()
        };

        for handler in snapshot {
            handler(args);
        }
    }

    /// Mark the emitter destroyed and drop all slots.
    ///
    /// Subsequent emits and registrations are inert; `destroyed()` reports
    /// `Some(true)` from here on.
    pub fn destroy(&self) {
        self.destroyed.set(true);
        self.slots.borrow_mut().clear();
    }

    /// Number of currently registered handlers.
    pub fn handler_count(&self) -> usize {
        self.slots.borrow().len()
    }

    fn register_slot(&self, signal: &str, phase: DispatchPhase, handler: Handler<A>) -> HandlerId {
        let id = HandlerId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);

        // Registration on a destroyed emitter is accepted but inert.
        if !self.destroyed.get() {
            self.slots.borrow_mut().push(Slot {
                id,
                signal: signal.to_string(),
                phase,
                handler,
            });
        }
        id
    }
}

impl<A: 'static> Default for LocalEmitter<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: 'static> Emitter<A> for LocalEmitter<A> {
    fn register(&self, signal: &str, handler: Handler<A>) -> HandlerId {
        self.register_slot(signal, DispatchPhase::Before, handler)
    }

    fn register_after(&self, signal: &str, handler: Handler<A>) -> HandlerId {
        self.register_slot(signal, DispatchPhase::After, handler)
    }

    fn unregister(&self, id: HandlerId) {
        self.slots.borrow_mut().retain(|s| s.id != id);
    }

    fn destroyed(&self) -> Option<bool> {
        Some(self.destroyed.get())
    }

    fn handler_connected(&self, id: HandlerId) -> Option<bool> {
        Some(self.slots.borrow().iter().any(|s| s.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_handler(log: &Rc<RefCell<Vec<&'static str>>>, tag: &'static str) -> Handler<u32> {
        let log = Rc::clone(log);
        Rc::new(move |_args| log.borrow_mut().push(tag))
    }

    #[test]
    fn test_emit_only_matching_signal() {
        let emitter = LocalEmitter::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        emitter.register("changed", recording_handler(&log, "changed"));
        emitter.register("closed", recording_handler(&log, "closed"));

        emitter.emit("changed", &0);
        assert_eq!(*log.borrow(), vec!["changed"]);
    }

    #[test]
    fn test_after_phase_runs_last() {
        let emitter = LocalEmitter::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        emitter.register_after("changed", recording_handler(&log, "after"));
        emitter.register("changed", recording_handler(&log, "first"));
        emitter.register("changed", recording_handler(&log, "second"));

        emitter.emit("changed", &0);
        assert_eq!(*log.borrow(), vec!["first", "second", "after"]);
    }

    #[test]
    fn test_unregister_is_idempotent() {
        let emitter: LocalEmitter<u32> = LocalEmitter::new();
        let id = emitter.register("changed", Rc::new(|_| {}));

        emitter.unregister(id);
        emitter.unregister(id);
        assert_eq!(emitter.handler_count(), 0);
        assert_eq!(emitter.handler_connected(id), Some(false));
    }

    #[test]
    fn test_handler_removed_during_emit_still_called() {
        let emitter = Rc::new(LocalEmitter::new());
        let log = Rc::new(RefCell::new(Vec::new()));
        let second_id = Rc::new(Cell::new(HandlerId(0)));

        let first: Handler<u32> = {
            let emitter = Rc::clone(&emitter);
            let log = Rc::clone(&log);
            let second_id = Rc::clone(&second_id);
            Rc::new(move |_args| {
                log.borrow_mut().push("first");
                emitter.unregister(second_id.get());
            })
        };
        emitter.register("changed", first);
        second_id.set(emitter.register("changed", recording_handler(&log, "second")));

        emitter.emit("changed", &0);
        // The snapshot was taken before "first" removed "second".
        assert_eq!(*log.borrow(), vec!["first", "second"]);
        assert_eq!(emitter.handler_connected(second_id.get()), Some(false));
    }

    #[test]
    fn test_destroy_silences_emitter() {
        let emitter = LocalEmitter::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        emitter.register("changed", recording_handler(&log, "changed"));
        emitter.destroy();

        emitter.emit("changed", &0);
        assert!(log.borrow().is_empty());
        assert_eq!(emitter.destroyed(), Some(true));
        assert_eq!(emitter.handler_count(), 0);
    }
}
