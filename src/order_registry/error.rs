//! Error types for the order registry.

use thiserror::Error;

/// Errors that can occur during order registry operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(u64),

    /// An error occurred while communicating with the registry task.
    #[error("Registry communication error: {0}")]
    RegistryCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::RegistryCommunicationError(msg)
    }
}
