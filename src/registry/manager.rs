//! The subscription registry.

use crate::emitter::{probe, Emitter, Liveness};
use crate::types::{BoundContext, Callback, DispatchPhase, Handler, HandlerId, SubscriptionId};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::{Rc, Weak};
use tracing::debug;

use super::types::{MatchFilter, RegistryConfig, RegistryStats, SubscribeOpts, SubscriptionInfo};

/// A stored subscription.
struct SubscriptionRecord<A: 'static> {
    id: SubscriptionId,
    signal: String,
    /// Back-reference only; the registry never owns the emitter's lifetime.
    emitter: Weak<dyn Emitter<A>>,
    callback: Callback<A>,
    handler_id: HandlerId,
    bound_context: Option<BoundContext>,
    phase: DispatchPhase,
}

impl<A: 'static> SubscriptionRecord<A> {
    fn matches(&self, filter: &MatchFilter<'_, A>) -> bool {
        if let Some(signal) = filter.signal {
            if self.signal != signal {
                return false;
            }
        }
        if let Some(emitter) = filter.emitter {
            if !self.emitter.ptr_eq(&Rc::downgrade(emitter)) {
                return false;
            }
        }
        if let Some(callback) = filter.callback {
            if !Rc::ptr_eq(&self.callback, callback) {
                return false;
            }
        }
        true
    }

    fn info(&self) -> SubscriptionInfo {
        SubscriptionInfo {
            id: self.id,
            signal: self.signal.clone(),
            handler_id: self.handler_id,
            phase: self.phase,
            has_bound_context: self.bound_context.is_some(),
        }
    }
}

/// Candidate resolved by a disconnect pass, detached from storage.
struct Candidate<A: 'static> {
    id: SubscriptionId,
    emitter: Weak<dyn Emitter<A>>,
    handler_id: HandlerId,
}

/// Tracks named-signal registrations against independently-owned emitters
/// and tears them down on request.
///
/// Every operation is total: missing emitters, already-dead emitters, and
/// no-match filters are absorbed as no-ops. A disconnect pass works off a
/// snapshot of its match set, so handlers that re-enter the registry from an
/// unregister side effect always see consistent storage.
///
/// Dropping the registry disconnects everything still stored.
pub struct SignalRegistry<A: 'static> {
    /// Stored records, insertion order preserved and observable.
    records: RefCell<Vec<SubscriptionRecord<A>>>,
    /// Counter for generating subscription IDs.
    next_id: Cell<u64>,
    config: RegistryConfig,
    subscribed: Cell<u64>,
    deduped: Cell<u64>,
    disconnected: Cell<u64>,
    pruned: Cell<u64>,
}

impl<A: 'static> SignalRegistry<A> {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a registry with custom configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            records: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            config,
            subscribed: Cell::new(0),
            deduped: Cell::new(0),
            disconnected: Cell::new(0),
            pruned: Cell::new(0),
        }
    }

    /// Register `callback` for `signal` on `emitter` and store the record.
    ///
    /// A `None` emitter is a silent no-op, so callers may wire an optional
    /// emitter without guarding. Unless `opts.force` is set, a record
    /// already matching the exact `(signal, emitter, callback)` triple
    /// suppresses re-registration.
    pub fn subscribe(
        &self,
        emitter: Option<&Rc<dyn Emitter<A>>>,
        signal: &str,
        callback: Callback<A>,
        opts: SubscribeOpts,
    ) {
        let Some(emitter) = emitter else {
            return;
        };

        if !opts.force {
            let duplicate = MatchFilter {
                signal: Some(signal),
                emitter: Some(emitter),
                callback: Some(&callback),
            };
            if self.records.borrow().iter().any(|r| r.matches(&duplicate)) {
                self.deduped.set(self.deduped.get() + 1);
                if self.config.debug {
                    debug!(signal, "skipping duplicate subscription");
                }
                return;
            }
        }

        let bound_context = opts.bound_context;
        let handler: Handler<A> = {
            let callback = Rc::clone(&callback);
            let context = bound_context.clone();
            Rc::new(move |args| callback(context.as_ref(), args))
        };

        let handler_id = if opts.after_dispatch {
            emitter.register_after(signal, handler)
        } else {
            emitter.register(signal, handler)
        };

        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.subscribed.set(self.subscribed.get() + 1);
        if self.config.debug {
            debug!(signal, handler = %handler_id, subscription = %id, "registered subscription");
        }

        self.records.borrow_mut().push(SubscriptionRecord {
            id,
            signal: signal.to_string(),
            emitter: Rc::downgrade(emitter),
            callback,
            handler_id,
            bound_context,
            phase: if opts.after_dispatch {
                DispatchPhase::After
            } else {
                DispatchPhase::Before
            },
        });
    }

    /// Whether any stored record matches `filter`.
    pub fn is_connected(&self, filter: MatchFilter<'_, A>) -> bool {
        self.records.borrow().iter().any(|r| r.matches(&filter))
    }

    /// Matching records in original subscribe order.
    pub fn matches(&self, filter: MatchFilter<'_, A>) -> Vec<SubscriptionInfo> {
        self.records
            .borrow()
            .iter()
            .filter(|r| r.matches(&filter))
            .map(|r| r.info())
            .collect()
    }

    /// Disconnect every stored record matching `filter`.
    ///
    /// Live emitters get their unregister primitive invoked; dead ones are
    /// pruned silently. Every candidate is removed from storage either way.
    pub fn disconnect(&self, filter: MatchFilter<'_, A>) {
        // Materialize the candidate set before touching anything; nested
        // registry calls from unregister side effects see consistent storage.
        let candidates: Vec<Candidate<A>> = self
            .records
            .borrow()
            .iter()
            .filter(|r| r.matches(&filter))
            .map(|r| Candidate {
                id: r.id,
                emitter: Weak::clone(&r.emitter),
                handler_id: r.handler_id,
            })
            .collect();
        if candidates.is_empty() {
            return;
        }

        for candidate in &candidates {
            match probe(&candidate.emitter, candidate.handler_id) {
                Liveness::Live(emitter) => {
                    emitter.unregister(candidate.handler_id);
                    self.disconnected.set(self.disconnected.get() + 1);
                    if self.config.debug {
                        debug!(
                            subscription = %candidate.id,
                            handler = %candidate.handler_id,
                            "disconnected subscription"
                        );
                    }
                }
                Liveness::Dead => {
                    self.pruned.set(self.pruned.get() + 1);
                    if self.config.debug {
                        debug!(subscription = %candidate.id, "pruned orphaned subscription");
                    }
                }
            }
        }

        // Remove every candidate, live or dead. Records added by nested
        // calls during the pass are not in the snapshot and survive.
        let removed: HashSet<SubscriptionId> = candidates.iter().map(|c| c.id).collect();
        self.records.borrow_mut().retain(|r| !removed.contains(&r.id));
    }

    /// Disconnect every stored record.
    pub fn disconnect_all(&self) {
        self.disconnect(MatchFilter::any());
    }

    /// Get stored record count.
    pub fn subscription_count(&self) -> usize {
        self.records.borrow().len()
    }

    /// Lifetime counters for this registry.
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            active: self.records.borrow().len(),
            subscribed_total: self.subscribed.get(),
            deduped_total: self.deduped.get(),
            disconnected_total: self.disconnected.get(),
            pruned_total: self.pruned.get(),
        }
    }
}

impl<A: 'static> Default for SignalRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: 'static> Drop for SignalRegistry<A> {
    fn drop(&mut self) {
        self.disconnect_all();
    }
}
