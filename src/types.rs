//! Core types for the subscription registry.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Opaque token returned by an emitter's registration primitive.
///
/// The registry never interprets the value; it only hands it back to the
/// same emitter's `unregister`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandlerId(pub u64);

impl fmt::Debug for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandlerId({})", self.0)
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a stored subscription record (assigned by the
/// registry).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u64);

impl fmt::Debug for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which dispatch phase a handler is registered for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchPhase {
    /// Default phase.
    Before,
    /// Ordered after the default phase.
    After,
}

impl Default for DispatchPhase {
    fn default() -> Self {
        DispatchPhase::Before
    }
}

/// Opaque context a callback may be bound to at subscribe time.
pub type BoundContext = Rc<dyn Any>;

/// Callback supplied to [`subscribe`](crate::SignalRegistry::subscribe).
///
/// The first argument is the bound context given at subscribe time, or
/// `None` when the subscription carries no context. Identity for dedup and
/// filtering is the `Rc` allocation, so callers that want either must pass
/// clones of the same handle.
pub type Callback<A> = Rc<dyn Fn(Option<&BoundContext>, &A)>;

/// Handler shape an emitter invokes: the callback with its bound context
/// already applied.
pub type Handler<A> = Rc<dyn Fn(&A)>;
