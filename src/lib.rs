//! # Order Desk
//!
//! > **Shared restaurant registries as Tokio actors.**
//!
//! This crate reworks a classic Singleton + Observer exercise — one shared
//! order list, one shared billing list, one shared notifier — into explicit,
//! message-passing components. Instead of hidden global instances, a single
//! composition root owns each registry and hands out cloneable client handles.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why actors instead of singletons?
//!
//! The shape being preserved is "exactly one logical registry per process,
//! reachable from anywhere that holds a handle". A global `static` gets you
//! there with hidden coupling and (in the lazy variant) an initialization
//! race. An actor task that exclusively owns its state gets you there with:
//! - **Explicit lifecycle**: the registries are constructed at startup inside
//!   [`runtime::Restaurant`] and shut down by dropping the clients.
//! - **Safe concurrent access**: each registry processes requests
//!   sequentially, so appends and reads interleave in a well-defined order
//!   without locks.
//! - **Testability**: tests construct their own registry instances; nothing
//!   leaks between tests through process-wide state.
//!
//! ### Generics: one message loop, two registries
//! The order and billing registries are both append-only sequences, so the
//! message loop is written once as [`framework::RegistryActor`] and
//! instantiated per record type. The notifier is a different shape (a keyed
//! subscriber list with fan-out) and gets its own actor in the same style.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic append-only registry: [`RegistryEntry`](framework::RegistryEntry),
//! [`RegistryActor`](framework::RegistryActor), [`RegistryClient`](framework::RegistryClient).
//!
//! ### 2. The Records ([`model`])
//! Pure data: [`Order`](model::Order), [`CostEntry`](model::CostEntry), and
//! their display forms [`OrderBoard`](model::OrderBoard) and
//! [`CostStatement`](model::CostStatement).
//!
//! ### 3. The Registries ([`order_registry`], [`billing_registry`], [`notifier`])
//! Concrete registries built on the engine, plus the hand-rolled notifier
//! actor with its [`Subscriber`](notifier::Subscriber) trait and per-delivery
//! fault boundary.
//!
//! ### 4. The Interface ([`clients`])
//! Typed wrappers — [`OrderClient`](clients::OrderClient),
//! [`BillingClient`](clients::BillingClient),
//! [`NotifierClient`](clients::NotifierClient) — that hide the channel
//! plumbing.
//!
//! ### 5. The Orchestrator ([`runtime`])
//! [`Restaurant`](runtime::Restaurant), the composition root, and
//! [`setup_tracing`](runtime::setup_tracing).
//!
//! ## 🚀 Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod billing_registry;
pub mod clients;
pub mod framework;
pub mod model;
pub mod notifier;
pub mod order_registry;
pub mod runtime;
