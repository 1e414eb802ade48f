//! Runtime orchestration and lifecycle management.
//!
//! This module contains the infrastructure for managing the application's runtime environment,
//! including:
//!
//! - **Registry lifecycle management**: Starting and shutting down the registry tasks
//! - **Composition root**: The one place that constructs the shared registries
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`Restaurant`] - The composition root that owns all three registries
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod restaurant;
pub mod tracing;

pub use restaurant::*;
pub use tracing::*;
