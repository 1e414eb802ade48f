use tracing::{error, info};

use crate::clients::{BillingClient, NotifierClient, OrderClient};
use crate::{billing_registry, notifier, order_registry};

/// The composition root for the restaurant's shared registries.
///
/// `Restaurant` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the registry tasks
/// - **Single-Instance Guarantee**: It constructs exactly one order registry,
///   one billing registry, and one notifier, and hands out cloneable client
///   handles instead of exposing hidden globals
///
/// # Architecture
///
/// The original design reached the registries through global singletons, one
/// lazily initialized and two eagerly. Here all three are constructed eagerly
/// at the composition root: explicit startup initialization gives the same
/// "exactly one logical registry" property without the unsynchronized
/// lazy-construction race, and makes the lifecycle testable.
///
/// The registries are leaf components; none depends on another, so there is
/// no wiring between them.
///
/// # Example
///
/// ```ignore
/// let restaurant = Restaurant::new();
///
/// restaurant.orders.add_order(order).await?;
/// restaurant.billing.add_cost(12.50).await?;
/// restaurant.notifier.publish("Order up").await?;
///
/// restaurant.shutdown().await?;
/// ```
pub struct Restaurant {
    /// Client for the order registry
    pub orders: OrderClient,

    /// Client for the billing registry
    pub billing: BillingClient,

    /// Client for the notifier
    pub notifier: NotifierClient,

    /// Task handles for all running registries (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Restaurant {
    /// Creates a new `Restaurant` with all three registries running.
    ///
    /// Each registry actor is spawned in its own Tokio task and lives until
    /// [`shutdown`](Restaurant::shutdown); there is no other teardown path.
    pub fn new() -> Self {
        let (order_actor, orders) = order_registry::new();
        let order_handle = tokio::spawn(order_actor.run());

        let (billing_actor, billing) = billing_registry::new();
        let billing_handle = tokio::spawn(billing_actor.run());

        let (notifier_actor, notifier) = notifier::new();
        let notifier_handle = tokio::spawn(notifier_actor.run());

        Self {
            orders,
            billing,
            notifier,
            handles: vec![order_handle, billing_handle, notifier_handle],
        }
    }

    /// Gracefully shuts down all registries.
    ///
    /// Dropping the clients closes their channels; each actor detects the
    /// closed channel and exits its event loop. The method then waits for
    /// every task and reports a panic as an error.
    ///
    /// Note that clones of the client handles held elsewhere keep their
    /// registry alive until they are dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down restaurant...");

        drop(self.orders);
        drop(self.billing);
        drop(self.notifier);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Registry task failed: {:?}", e);
                return Err(format!("Registry task failed: {:?}", e));
            }
        }

        info!("Restaurant shutdown complete.");
        Ok(())
    }
}

impl Default for Restaurant {
    fn default() -> Self {
        Self::new()
    }
}
