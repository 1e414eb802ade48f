//! Generic registry infrastructure shared by the concrete registries.

pub mod core;

pub use self::core::*;
