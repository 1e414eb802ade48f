//! Pure data structures (DTOs) implementing the [`RegistryEntry`](crate::framework::RegistryEntry) trait.

pub mod cost;
pub mod order;

pub use cost::*;
pub use order::*;
