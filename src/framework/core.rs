//! # Core Registry Framework
//!
//! This module defines the generic building blocks for the registry system.
//!
//! ## Key Types
//!
//! - [`RegistryEntry`]: The trait that all registry record types must implement.
//! - [`RegistryActor`]: The generic actor that owns one append-only sequence of records.
//! - [`RegistryClient`]: The generic client for communicating with a registry.
//! - [`RegistryError`]: Common errors (e.g., RegistryClosed, NotFound).

use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use async_trait::async_trait;

// =============================================================================
// 1. THE ABSTRACTION (Entry Trait with Hooks and DTOs)
// =============================================================================

/// Trait that any registry record must implement to be managed by [`RegistryActor`].
///
/// # Architecture Note
/// By defining a contract (`RegistryEntry`) that all our record types (Order, CostEntry)
/// must satisfy, we can write the registry message loop *once* and reuse it for every
/// registry that stores an append-only sequence.
///
/// We use Associated Types (`AppendParams`, `UpdateParams`) to enforce type safety:
/// an order registry accepts an order payload, and the compiler rejects a cost payload.
///
/// # Async & Hooks
/// The trait is `#[async_trait]` so the update hook can run asynchronous work.
/// Registries are leaf components (no registry depends on another), so there is
/// no injected context here.
#[async_trait]
pub trait RegistryEntry: Clone + Send + Sync + 'static {
    /// The data required to append a new record (DTO - Data Transfer Object).
    type AppendParams: Send + Sync + Debug;

    /// The data required to update an existing record.
    /// Use `()` and reject the update if records are immutable once appended.
    type UpdateParams: Send + Sync + Debug;

    /// Construct the full record from its insertion ordinal and the payload.
    ///
    /// `seq` is 1-based and assigned by the registry in arrival order.
    fn from_append_params(seq: u64, params: Self::AppendParams) -> Result<Self, String>;

    /// Called when an update request is received for this record.
    async fn on_update(&mut self, update: Self::UpdateParams) -> Result<(), String>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the registry framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RegistryError {
    #[error("Registry closed")]
    RegistryClosed,
    #[error("Registry dropped response channel")]
    RegistryDropped,
    #[error("No entry with ordinal {0}")]
    NotFound(u64),
    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for the one-shot response channel used by registries.
pub type Response<T> = oneshot::Sender<Result<T, RegistryError>>;

/// Internal message type sent to a registry to request operations.
///
/// # Append-Only Design
/// The variants deliberately cover less than full CRUD. Registries hold
/// authoritative history: records are appended, read back in insertion order,
/// and (where the record type allows it) updated in place. There is no delete
/// operation because the sequences only grow by contract.
///
/// - **Append**: adds a record built from [`RegistryEntry::AppendParams`] and
///   returns its 1-based insertion ordinal.
/// - **Get**: fetches a single record by ordinal.
/// - **List**: returns a snapshot of the whole sequence in insertion order.
/// - **Update**: mutates one record through [`RegistryEntry::on_update`].
#[derive(Debug)]
pub enum RegistryRequest<T: RegistryEntry> {
    Append {
        params: T::AppendParams,
        respond_to: Response<u64>,
    },
    Get {
        seq: u64,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        seq: u64,
        update: T::UpdateParams,
        respond_to: Response<T>,
    },
}

// =============================================================================
// 3. THE GENERIC REGISTRY ACTOR
// =============================================================================

/// The generic actor that owns one append-only sequence of records.
///
/// # Architecture Note
/// This struct is the "server" half of a registry. It owns the backing `Vec`
/// and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each registry processes its messages *sequentially* in its own task, so the
/// backing sequence needs no `Mutex` or `RwLock`. Exclusive ownership of state
/// within the task is what preserves the append-then-read ordering guarantee
/// across concurrent callers.
pub struct RegistryActor<T: RegistryEntry> {
    receiver: mpsc::Receiver<RegistryRequest<T>>,
    entries: Vec<T>,
}

impl<T: RegistryEntry> RegistryActor<T> {
    pub fn new(buffer_size: usize) -> (Self, RegistryClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            entries: Vec::new(),
        };
        let client = RegistryClient::new(sender);
        (actor, client)
    }

    /// Runs the registry's event loop, processing messages until the channel closes.
    ///
    /// Ordinals are assigned here, under the actor's exclusive ownership of the
    /// sequence, so two concurrent appends can never observe the same ordinal.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Order" instead of "order_desk::model::order::Order")
        let entry_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entry_type, "Registry started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RegistryRequest::Append { params, respond_to } => {
                    debug!(entry_type, ?params, "Append");
                    let seq = self.entries.len() as u64 + 1;

                    match T::from_append_params(seq, params) {
                        Ok(item) => {
                            self.entries.push(item);
                            info!(entry_type, seq, size = self.entries.len(), "Appended");
                            let _ = respond_to.send(Ok(seq));
                        }
                        Err(e) => {
                            warn!(entry_type, error = %e, "Append failed");
                            let _ = respond_to.send(Err(RegistryError::Custom(e)));
                        }
                    }
                }
                RegistryRequest::Get { seq, respond_to } => {
                    let item = self.entry_at(seq).cloned();
                    let found = item.is_some();
                    debug!(entry_type, seq, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                RegistryRequest::List { respond_to } => {
                    debug!(entry_type, size = self.entries.len(), "List");
                    let _ = respond_to.send(Ok(self.entries.clone()));
                }
                RegistryRequest::Update { seq, update, respond_to } => {
                    debug!(entry_type, seq, ?update, "Update");
                    match self.entry_at_mut(seq) {
                        Some(item) => {
                            // Await the async hook
                            if let Err(e) = item.on_update(update).await {
                                warn!(entry_type, seq, error = %e, "Update failed");
                                let _ = respond_to.send(Err(RegistryError::Custom(e)));
                                continue;
                            }
                            info!(entry_type, seq, "Updated");
                            let _ = respond_to.send(Ok(item.clone()));
                        }
                        None => {
                            warn!(entry_type, seq, "Not found");
                            let _ = respond_to.send(Err(RegistryError::NotFound(seq)));
                        }
                    }
                }
            }
        }

        info!(entry_type, size = self.entries.len(), "Shutdown");
    }

    fn entry_at(&self, seq: u64) -> Option<&T> {
        seq.checked_sub(1).and_then(|i| self.entries.get(i as usize))
    }

    fn entry_at_mut(&mut self, seq: u64) -> Option<&mut T> {
        seq.checked_sub(1)
            .and_then(|i| self.entries.get_mut(i as usize))
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`RegistryActor`].
#[derive(Clone)]
pub struct RegistryClient<T: RegistryEntry> {
    sender: mpsc::Sender<RegistryRequest<T>>,
}

impl<T: RegistryEntry> RegistryClient<T> {
    pub fn new(sender: mpsc::Sender<RegistryRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn append(&self, params: T::AppendParams) -> Result<u64, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Append { params, respond_to })
            .await
            .map_err(|_| RegistryError::RegistryClosed)?;
        response.await.map_err(|_| RegistryError::RegistryDropped)?
    }

    pub async fn get(&self, seq: u64) -> Result<Option<T>, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Get { seq, respond_to })
            .await
            .map_err(|_| RegistryError::RegistryClosed)?;
        response.await.map_err(|_| RegistryError::RegistryDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::List { respond_to })
            .await
            .map_err(|_| RegistryError::RegistryClosed)?;
        response.await.map_err(|_| RegistryError::RegistryDropped)?
    }

    pub async fn update(&self, seq: u64, update: T::UpdateParams) -> Result<T, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Update { seq, update, respond_to })
            .await
            .map_err(|_| RegistryError::RegistryClosed)?;
        response.await.map_err(|_| RegistryError::RegistryDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
