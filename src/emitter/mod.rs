//! Emitter contract and the built-in in-process emitter.
//!
//! An emitter is anything that can register/unregister handlers for named
//! signals and optionally report its own liveness. The registry talks to
//! emitters exclusively through the [`Emitter`] trait, so native toolkit
//! handles and plain in-process emitters are managed the same way.

mod capability;
mod local;

pub use capability::Emitter;
pub(crate) use capability::{probe, Liveness};
pub use local::LocalEmitter;
