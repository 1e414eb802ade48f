//! Order-specific registry logic and entry implementation.

pub mod entry;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::framework::RegistryActor;
use crate::model::Order;

/// Creates a new order registry and its client.
pub fn new() -> (RegistryActor<Order>, OrderClient) {
    let (actor, generic_client) = RegistryActor::new(32);
    let client = OrderClient::new(generic_client);

    (actor, client)
}
