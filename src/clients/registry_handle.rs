use crate::framework::{RegistryClient, RegistryEntry, RegistryError};
use async_trait::async_trait;

/// Trait for registry-specific clients to inherit standard read operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// the operations every registry supports: fetching one record by ordinal
/// and listing the whole sequence.
#[async_trait]
pub trait RegistryHandle<T: RegistryEntry>: Send + Sync {
    /// The registry-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic RegistryClient.
    fn inner(&self) -> &RegistryClient<T>;

    /// Map framework errors to the specific registry error type.
    fn map_error(e: RegistryError) -> Self::Error;

    /// Fetch a record by its insertion ordinal.
    #[tracing::instrument(skip(self))]
    async fn get(&self, seq: u64) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(seq).await.map_err(Self::map_error)
    }

    /// Snapshot the whole sequence in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
