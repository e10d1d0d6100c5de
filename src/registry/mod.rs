//! Subscription registry for named-signal emitters.
//!
//! The registry sits between application code and arbitrary emitters:
//! - `subscribe` deduplicates, delegates to the emitter's registration
//!   primitive, and stores a record
//! - `disconnect`/`disconnect_all` resolve matches, prune dead emitters,
//!   and delegate live ones to the emitter's unregister primitive
//! - `matches`/`is_connected` are read-only projections in subscribe order
//!
//! # Example
//!
//! ```ignore
//! let registry = SignalRegistry::new();
//! let emitter: Rc<dyn Emitter<Event>> = panel.clone();
//!
//! registry.subscribe(Some(&emitter), "changed", on_changed, SubscribeOpts::default());
//! registry.subscribe(Some(&emitter), "closed", on_closed, SubscribeOpts::after());
//!
//! // Later, tear down one signal...
//! registry.disconnect(MatchFilter::signal("changed"));
//! // ...or everything, even if some emitters have since been destroyed.
//! registry.disconnect_all();
//! ```

mod manager;
mod types;

pub use manager::SignalRegistry;
pub use types::{MatchFilter, RegistryConfig, RegistryStats, SubscribeOpts, SubscriptionInfo};
