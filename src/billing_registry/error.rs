//! Error types for the billing registry.

use thiserror::Error;

/// Errors that can occur during billing registry operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BillingError {
    /// An error occurred while communicating with the registry task.
    #[error("Registry communication error: {0}")]
    RegistryCommunicationError(String),
}

impl From<String> for BillingError {
    fn from(msg: String) -> Self {
        BillingError::RegistryCommunicationError(msg)
    }
}
