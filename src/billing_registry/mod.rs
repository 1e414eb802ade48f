//! Billing-specific registry logic and entry implementation.

pub mod entry;
pub mod error;

pub use error::*;

use crate::clients::BillingClient;
use crate::framework::RegistryActor;
use crate::model::CostEntry;

/// Creates a new billing registry and its client.
pub fn new() -> (RegistryActor<CostEntry>, BillingClient) {
    let (actor, generic_client) = RegistryActor::new(32);
    let client = BillingClient::new(generic_client);

    (actor, client)
}
