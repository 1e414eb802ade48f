use tracing::{debug, instrument};

use crate::billing_registry::BillingError;
use crate::clients::registry_handle::RegistryHandle;
use crate::framework::{RegistryClient, RegistryError};
use crate::model::{CostEntry, CostStatement};
use async_trait::async_trait;

/// Client for interacting with the billing registry.
#[derive(Clone)]
pub struct BillingClient {
    inner: RegistryClient<CostEntry>,
}

impl BillingClient {
    pub fn new(inner: RegistryClient<CostEntry>) -> Self {
        Self { inner }
    }

    /// Records a cost and returns its insertion ordinal.
    ///
    /// No sign or range validation by contract.
    #[instrument(skip(self))]
    pub async fn add_cost(&self, amount: f64) -> Result<u64, BillingError> {
        debug!(amount, "add_cost called");

        self.inner
            .append(amount)
            .await
            .map_err(|e| BillingError::RegistryCommunicationError(e.to_string()))
    }

    /// Snapshot of all recorded costs plus their total, in display form.
    pub async fn statement(&self) -> Result<CostStatement, BillingError> {
        let amounts = self.list().await?.into_iter().map(|c| c.amount).collect();
        Ok(CostStatement { amounts })
    }
}

#[async_trait]
impl RegistryHandle<CostEntry> for BillingClient {
    type Error = BillingError;

    fn inner(&self) -> &RegistryClient<CostEntry> {
        &self.inner
    }

    fn map_error(e: RegistryError) -> Self::Error {
        BillingError::RegistryCommunicationError(e.to_string())
    }
}
