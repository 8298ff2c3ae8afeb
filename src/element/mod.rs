//! Placeable elements, their shared profiles and notification plumbing

/// Elements and the identity-compared handles stored in grids
pub mod handle;
/// Profile trait describing element size and combine behaviour
pub mod profile;
/// Closed set of per-instance payloads
pub mod runtime;
/// Publish/subscribe signals with explicit listener handles
pub mod signal;

pub use handle::{Element, ElementHandle};
pub use profile::{BasicProfile, CombineOutcome, ElementProfile, ProfileRef};
pub use runtime::RuntimeData;
pub use signal::{ListenerId, Signal, UpdateSignal};
