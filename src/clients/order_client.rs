use tracing::{debug, info, instrument};

use crate::clients::registry_handle::RegistryHandle;
use crate::framework::{RegistryClient, RegistryError};
use crate::model::{Order, OrderBoard, OrderCreate, OrderStatusUpdate};
use crate::order_registry::OrderError;
use async_trait::async_trait;

/// Client for interacting with the order registry.
///
/// Appending never fails by contract; the only errors this client surfaces
/// are channel failures and unknown ordinals on status updates.
#[derive(Clone)]
pub struct OrderClient {
    inner: RegistryClient<Order>,
}

impl OrderClient {
    pub fn new(inner: RegistryClient<Order>) -> Self {
        Self { inner }
    }

    /// Appends an order and returns its insertion ordinal.
    #[instrument(skip(self, order))]
    pub async fn add_order(&self, order: OrderCreate) -> Result<u64, OrderError> {
        debug!(?order, "add_order called");
        info!("Sending add_order to registry");

        self.inner
            .append(order)
            .await
            .map_err(|e| OrderError::RegistryCommunicationError(e.to_string()))
    }

    /// Replaces the stored status of one order.
    ///
    /// The registry stores the status verbatim; what the string means is up
    /// to whatever drives the kitchen workflow.
    #[instrument(skip(self, status))]
    pub async fn update_status(
        &self,
        seq: u64,
        status: impl Into<String>,
    ) -> Result<Order, OrderError> {
        let update = OrderStatusUpdate { status: status.into() };
        debug!(seq, ?update, "update_status called");

        self.inner.update(seq, update).await.map_err(|e| match e {
            RegistryError::NotFound(seq) => OrderError::NotFound(seq),
            other => OrderError::RegistryCommunicationError(other.to_string()),
        })
    }

    /// Snapshot of all orders in display form.
    pub async fn board(&self) -> Result<OrderBoard, OrderError> {
        let orders = self.list().await?;
        Ok(OrderBoard { orders })
    }
}

#[async_trait]
impl RegistryHandle<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &RegistryClient<Order> {
        &self.inner
    }

    fn map_error(e: RegistryError) -> Self::Error {
        OrderError::RegistryCommunicationError(e.to_string())
    }
}
