use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::notifier::{NotifierError, NotifierRequest, PublishReport, Subscriber};

/// Client for interacting with the notifier.
///
/// All operations are total: duplicate subscriptions and absent unsubscribes
/// are reported as `false`, and delivery failures come back inside the
/// [`PublishReport`] rather than as errors.
#[derive(Clone)]
pub struct NotifierClient {
    sender: mpsc::Sender<NotifierRequest>,
}

impl NotifierClient {
    pub fn new(sender: mpsc::Sender<NotifierRequest>) -> Self {
        Self { sender }
    }

    /// Registers `subscriber` under `key`.
    ///
    /// Returns `true` if the subscription was added, `false` if the key was
    /// already registered (idempotent no-op).
    #[instrument(skip(self, key, subscriber))]
    pub async fn subscribe(
        &self,
        key: impl Into<String>,
        subscriber: Arc<dyn Subscriber>,
    ) -> Result<bool, NotifierError> {
        let key = key.into();
        debug!(subscriber = %key, "subscribe called");

        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(NotifierRequest::Subscribe { key, subscriber, respond_to })
            .await
            .map_err(|_| NotifierError::NotifierClosed)?;
        response.await.map_err(|_| NotifierError::NotifierDropped)
    }

    /// Removes the subscription registered under `key`.
    ///
    /// Returns `false` if the key was never subscribed (no-op, not an error).
    #[instrument(skip(self))]
    pub async fn unsubscribe(&self, key: &str) -> Result<bool, NotifierError> {
        debug!(subscriber = %key, "unsubscribe called");

        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(NotifierRequest::Unsubscribe {
                key: key.to_string(),
                respond_to,
            })
            .await
            .map_err(|_| NotifierError::NotifierClosed)?;
        response.await.map_err(|_| NotifierError::NotifierDropped)
    }

    /// Delivers `message` to every current subscriber before returning.
    #[instrument(skip(self, message))]
    pub async fn publish(
        &self,
        message: impl Into<String>,
    ) -> Result<PublishReport, NotifierError> {
        let message = message.into();
        debug!(%message, "publish called");

        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(NotifierRequest::Publish { message, respond_to })
            .await
            .map_err(|_| NotifierError::NotifierClosed)?;
        response.await.map_err(|_| NotifierError::NotifierDropped)
    }
}
