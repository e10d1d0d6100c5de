//! Capability contract an emitter satisfies, and the liveness probe.

use crate::types::{Handler, HandlerId};
use std::rc::{Rc, Weak};

/// Contract an emitter must satisfy to be managed by a
/// [`SignalRegistry`](crate::SignalRegistry).
///
/// `register`/`register_after`/`unregister` are required. The two liveness
/// methods are optional capabilities: the default `None` means "capability
/// absent", and the probe falls through to the next rung. Returning
/// `Some(..)` resolves the capability once per probe, with no type
/// inspection on the registry side.
pub trait Emitter<A: 'static> {
    /// Begin invoking `handler` whenever `signal` fires. Returns an opaque
    /// token accepted by [`unregister`](Emitter::unregister).
    fn register(&self, signal: &str, handler: Handler<A>) -> HandlerId;

    /// Same as [`register`](Emitter::register), but ordered after the
    /// default dispatch phase.
    fn register_after(&self, signal: &str, handler: Handler<A>) -> HandlerId;

    /// Remove the handler identified by `id`. Idempotent on the emitter's
    /// side; the registry only calls this while the emitter is live.
    fn unregister(&self, id: HandlerId);

    /// Whether the emitter's underlying registration state was destroyed.
    fn destroyed(&self) -> Option<bool> {
        None
    }

    /// Whether the handler identified by `id` is still connected.
    fn handler_connected(&self, id: HandlerId) -> Option<bool> {
        let _ = id;
        None
    }
}

/// Outcome of a liveness probe.
pub(crate) enum Liveness<A: 'static> {
    /// The emitter is live; safe to call its unregister primitive.
    Live(Rc<dyn Emitter<A>>),
    /// The emitter is gone or reports destruction.
    Dead,
}

/// Resolve liveness for one stored subscription.
///
/// The ladder: a failed `Weak` upgrade is dead (the allocation itself is
/// gone); otherwise `destroyed()` decides if present; otherwise
/// `handler_connected(id)` decides if present; otherwise assume live.
pub(crate) fn probe<A: 'static>(emitter: &Weak<dyn Emitter<A>>, id: HandlerId) -> Liveness<A> {
    let Some(emitter) = emitter.upgrade() else {
        return Liveness::Dead;
    };

    let live = match emitter.destroyed() {
        Some(destroyed) => !destroyed,
        None => emitter.handler_connected(id).unwrap_or(true),
    };

    if live {
        Liveness::Live(emitter)
    } else {
        Liveness::Dead
    }
}
