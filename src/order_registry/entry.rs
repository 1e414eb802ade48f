//! Entry trait implementation for the Order domain type.
//!
//! This module contains the [`RegistryEntry`] trait implementation
//! that enables [`Order`] to be managed by the generic [`crate::framework::RegistryActor`].

use crate::framework::RegistryEntry;
use crate::model::{Order, OrderCreate, OrderStatusUpdate};
use async_trait::async_trait;

#[async_trait]
impl RegistryEntry for Order {
    type AppendParams = OrderCreate;
    type UpdateParams = OrderStatusUpdate;

    /// Creates a new Order from submission parameters.
    ///
    /// The registry assigns the insertion ordinal; the status starts as
    /// "Preparing" via [`Order::new`].
    fn from_append_params(seq: u64, params: OrderCreate) -> Result<Self, String> {
        let mut order = Order::new(params.customer, params.description);
        order.seq = seq;
        Ok(order)
    }

    /// Stores the new status verbatim. The registry does not interpret it.
    async fn on_update(&mut self, update: OrderStatusUpdate) -> Result<(), String> {
        self.status = update.status;
        Ok(())
    }
}
