//! # Tether
//!
//! A lifecycle-aware registry for named-signal subscriptions with safe
//! teardown, even when an emitter has since been destroyed by code the
//! registry does not control.
//!
//! ## Core Concepts
//!
//! - **Emitters**: anything implementing [`Emitter`]: register/unregister
//!   named-signal handlers, optionally report liveness
//! - **Subscriptions**: records the registry stores per registration, in
//!   observable insertion order
//! - **Liveness**: capability-based probing at disconnect time; dead
//!   emitters are pruned without their unregister primitive being invoked
//! - **Totality**: lifecycle races never surface as errors
//!
//! ## Example
//!
//! ```ignore
//! use tether::{MatchFilter, SignalRegistry, SubscribeOpts};
//!
//! let registry = SignalRegistry::new();
//! registry.subscribe(Some(&emitter), "changed", callback, SubscribeOpts::default());
//!
//! assert!(registry.is_connected(MatchFilter::signal("changed")));
//!
//! // Emitter destroyed elsewhere? Still safe:
//! registry.disconnect_all();
//! ```

pub mod emitter;
pub mod error;
pub mod layout;
pub mod registry;
pub mod types;

// Re-exports
pub use emitter::{Emitter, LocalEmitter};
pub use error::{Result, SettingsError};
pub use layout::{LayoutChoice, Orientation, WindowPos};
pub use registry::{
    MatchFilter, RegistryConfig, RegistryStats, SignalRegistry, SubscribeOpts, SubscriptionInfo,
};
pub use types::*;
