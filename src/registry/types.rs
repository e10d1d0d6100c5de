//! Option, filter, and projection types for the registry.

use crate::emitter::Emitter;
use crate::types::{BoundContext, Callback, DispatchPhase, HandlerId, SubscriptionId};
use serde::Serialize;
use std::fmt;
use std::rc::Rc;

/// Registry configuration.
#[derive(Clone, Debug, Default)]
pub struct RegistryConfig {
    /// Emit debug-level tracing for every subscription lifecycle transition.
    pub debug: bool,
}

/// Options for [`subscribe`](crate::SignalRegistry::subscribe).
#[derive(Clone, Default)]
pub struct SubscribeOpts {
    /// Context the callback is invoked with. `None` leaves the callback's
    /// own captures as its only scope.
    pub bound_context: Option<BoundContext>,

    /// Allow a duplicate `(signal, emitter, callback)` registration. The
    /// caller owns the consequence of double-firing.
    pub force: bool,

    /// Register via the emitter's after-phase primitive.
    pub after_dispatch: bool,
}

impl SubscribeOpts {
    /// Bypass dedup.
    pub fn forced() -> Self {
        Self {
            force: true,
            ..Default::default()
        }
    }

    /// Register for the after phase.
    pub fn after() -> Self {
        Self {
            after_dispatch: true,
            ..Default::default()
        }
    }

    /// Bind the callback to `context`.
    pub fn bound(context: BoundContext) -> Self {
        Self {
            bound_context: Some(context),
            ..Default::default()
        }
    }
}

impl fmt::Debug for SubscribeOpts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscribeOpts")
            .field("bound_context", &self.bound_context.is_some())
            .field("force", &self.force)
            .field("after_dispatch", &self.after_dispatch)
            .finish()
    }
}

/// Filter for matching stored subscriptions.
///
/// Each field is applied independently by equality; an omitted field widens
/// the match. Emitter and callback identity is the `Rc` allocation.
pub struct MatchFilter<'a, A: 'static> {
    /// Match records with this signal name.
    pub signal: Option<&'a str>,

    /// Match records registered against this emitter.
    pub emitter: Option<&'a Rc<dyn Emitter<A>>>,

    /// Match records holding this callback.
    pub callback: Option<&'a Callback<A>>,
}

impl<'a, A: 'static> MatchFilter<'a, A> {
    /// Match every stored subscription.
    pub fn any() -> Self {
        Self::default()
    }

    /// Match by signal name only.
    pub fn signal(signal: &'a str) -> Self {
        Self {
            signal: Some(signal),
            ..Self::default()
        }
    }

    /// Match by emitter only.
    pub fn emitter(emitter: &'a Rc<dyn Emitter<A>>) -> Self {
        Self {
            emitter: Some(emitter),
            ..Self::default()
        }
    }

    /// Match by callback only.
    pub fn callback(callback: &'a Callback<A>) -> Self {
        Self {
            callback: Some(callback),
            ..Self::default()
        }
    }
}

impl<'a, A: 'static> Default for MatchFilter<'a, A> {
    fn default() -> Self {
        Self {
            signal: None,
            emitter: None,
            callback: None,
        }
    }
}

impl<'a, A: 'static> Clone for MatchFilter<'a, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, A: 'static> Copy for MatchFilter<'a, A> {}

impl<'a, A: 'static> fmt::Debug for MatchFilter<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchFilter")
            .field("signal", &self.signal)
            .field("emitter", &self.emitter.is_some())
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

/// Read-only projection of a stored subscription.
#[derive(Clone, Debug, Serialize)]
pub struct SubscriptionInfo {
    pub id: SubscriptionId,
    pub signal: String,
    pub handler_id: HandlerId,
    pub phase: DispatchPhase,
    pub has_bound_context: bool,
}

/// Registry statistics.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct RegistryStats {
    /// Currently stored records.
    pub active: usize,
    /// Successful registrations since creation.
    pub subscribed_total: u64,
    /// Subscribe calls skipped by dedup.
    pub deduped_total: u64,
    /// Records removed with the emitter's unregister invoked.
    pub disconnected_total: u64,
    /// Orphaned records pruned without unregister.
    pub pruned_total: u64,
}
