//! Error types for the notifier.

use thiserror::Error;

/// Errors that can occur while communicating with the notifier task.
///
/// The notifier's own operations are total: subscribing twice and removing an
/// absent subscriber are no-ops, and per-subscriber delivery failures are
/// reported in the [`PublishReport`](crate::notifier::PublishReport) rather
/// than surfaced here.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NotifierError {
    #[error("Notifier closed")]
    NotifierClosed,

    #[error("Notifier dropped response channel")]
    NotifierDropped,
}
