//! Subscriber bookkeeping and message fan-out.
//!
//! Unlike the order and billing registries, the notifier does not store an
//! append-only sequence of records, so it gets its own actor instead of the
//! generic [`RegistryActor`](crate::framework::RegistryActor). It follows the
//! same shape: an mpsc message loop owning the state, a oneshot reply per
//! request, and a cloneable client.

pub mod core;
pub mod error;
pub mod subscriber;

pub use self::core::*;
pub use error::*;
pub use subscriber::*;

use crate::clients::NotifierClient;

/// Creates a new notifier and its client.
pub fn new() -> (NotifierActor, NotifierClient) {
    NotifierActor::new(32)
}
