//! Type-safe client wrappers around the raw registry channels.
//!
//! The rest of the application never touches message passing directly; these
//! wrappers hide the channel plumbing and speak in domain types.

pub mod billing_client;
pub mod notifier_client;
pub mod order_client;
pub mod registry_handle;

pub use billing_client::*;
pub use notifier_client::*;
pub use order_client::*;
pub use registry_handle::*;
