use async_trait::async_trait;

/// Capability for receiving published messages.
///
/// Implementors register with the notifier under a caller-chosen key; the
/// notifier holds an `Arc` to the subscriber but never owns its lifecycle.
///
/// # Re-entrancy
/// `notify` runs while the notifier task is busy delivering. A handler that
/// needs to subscribe or unsubscribe in response to a message must not await
/// the notifier's reply from inside `notify` (that reply cannot arrive until
/// the fan-out finishes); spawn a task for the follow-up call instead.
#[async_trait]
pub trait Subscriber: Send + Sync + 'static {
    /// Handle one published message.
    ///
    /// Returning an error marks this delivery as failed in the
    /// [`PublishReport`](crate::notifier::PublishReport); it does not stop
    /// delivery to the remaining subscribers.
    async fn notify(&self, message: &str) -> Result<(), String>;
}
