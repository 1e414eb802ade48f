//! # Notifier Actor
//!
//! The actor that owns the subscriber list and performs message fan-out.
//!
//! ## Key Types
//!
//! - [`NotifierActor`]: owns the ordered subscriber list.
//! - [`NotifierRequest`]: subscribe / unsubscribe / publish messages.
//! - [`PublishReport`]: per-fan-out delivery summary.

use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::clients::NotifierClient;
use crate::notifier::subscriber::Subscriber;

// =============================================================================
// 1. MESSAGES & REPORTS
// =============================================================================

/// Internal message type sent to the notifier.
///
/// No variant carries a fallible payload: subscription changes are idempotent
/// no-ops when they don't apply, and delivery failures are aggregated into the
/// [`PublishReport`] instead of failing the request.
pub enum NotifierRequest {
    Subscribe {
        key: String,
        subscriber: Arc<dyn Subscriber>,
        respond_to: oneshot::Sender<bool>,
    },
    Unsubscribe {
        key: String,
        respond_to: oneshot::Sender<bool>,
    },
    Publish {
        message: String,
        respond_to: oneshot::Sender<PublishReport>,
    },
}

/// One failed delivery within a fan-out.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishFailure {
    /// Registration key of the subscriber that failed.
    pub subscriber: String,
    pub reason: String,
}

/// Summary of one fan-out: how many subscribers received the message and
/// which deliveries failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublishReport {
    pub delivered: usize,
    pub failures: Vec<PublishFailure>,
}

impl PublishReport {
    /// True when every subscriber received the message.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

// =============================================================================
// 2. THE ACTOR
// =============================================================================

/// The actor that maintains the subscriber list and delivers published messages.
///
/// # Ordering & Snapshot Policy
/// Subscribers are kept in subscription order and notified in that order.
/// Each publish operates on a snapshot of the list taken when the publish
/// message is processed: subscription changes requested during a fan-out
/// queue behind it on the actor's channel and take effect afterwards.
///
/// # Fault Boundary
/// Each delivery runs in its own task. A handler that returns an error or
/// panics is recorded in the [`PublishReport`] and logged as a warning;
/// delivery continues to the remaining subscribers.
pub struct NotifierActor {
    receiver: mpsc::Receiver<NotifierRequest>,
    subscribers: Vec<(String, Arc<dyn Subscriber>)>,
}

impl NotifierActor {
    pub fn new(buffer_size: usize) -> (Self, NotifierClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            subscribers: Vec::new(),
        };
        let client = NotifierClient::new(sender);
        (actor, client)
    }

    /// Runs the notifier's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        info!("Notifier started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                NotifierRequest::Subscribe { key, subscriber, respond_to } => {
                    let added = if self.position(&key).is_some() {
                        // Duplicate subscription is a no-op, not an error
                        debug!(subscriber = %key, "Already subscribed");
                        false
                    } else {
                        self.subscribers.push((key.clone(), subscriber));
                        info!(subscriber = %key, size = self.subscribers.len(), "Subscribed");
                        true
                    };
                    let _ = respond_to.send(added);
                }
                NotifierRequest::Unsubscribe { key, respond_to } => {
                    let removed = match self.position(&key) {
                        Some(idx) => {
                            self.subscribers.remove(idx);
                            info!(subscriber = %key, size = self.subscribers.len(), "Unsubscribed");
                            true
                        }
                        None => {
                            debug!(subscriber = %key, "Not subscribed");
                            false
                        }
                    };
                    let _ = respond_to.send(removed);
                }
                NotifierRequest::Publish { message, respond_to } => {
                    debug!(%message, subscribers = self.subscribers.len(), "Publish");
                    let snapshot = self.subscribers.clone();
                    let report = fan_out(&snapshot, &message).await;
                    info!(
                        %message,
                        delivered = report.delivered,
                        failed = report.failures.len(),
                        "Published"
                    );
                    let _ = respond_to.send(report);
                }
            }
        }

        info!(size = self.subscribers.len(), "Shutdown");
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.subscribers.iter().position(|(k, _)| k == key)
    }
}

/// Delivers `message` to every subscriber in the snapshot, sequentially and
/// in subscription order.
async fn fan_out(snapshot: &[(String, Arc<dyn Subscriber>)], message: &str) -> PublishReport {
    let mut report = PublishReport::default();

    for (key, subscriber) in snapshot {
        let sub = Arc::clone(subscriber);
        let msg = message.to_string();

        // Run each delivery in its own task so a panicking handler cannot
        // take down the notifier or abort the rest of the fan-out.
        let outcome = tokio::spawn(async move { sub.notify(&msg).await }).await;

        match outcome {
            Ok(Ok(())) => report.delivered += 1,
            Ok(Err(reason)) => {
                warn!(subscriber = %key, %reason, "Delivery failed");
                report.failures.push(PublishFailure {
                    subscriber: key.clone(),
                    reason,
                });
            }
            Err(join_err) => {
                warn!(subscriber = %key, error = ?join_err, "Subscriber panicked");
                report.failures.push(PublishFailure {
                    subscriber: key.clone(),
                    reason: "subscriber panicked".to_string(),
                });
            }
        }
    }

    report
}
