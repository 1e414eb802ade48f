use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use order_desk::notifier::{self, Subscriber};

/// Test subscriber that records every message it receives, tagged with its
/// registration key so delivery order can be asserted across subscribers.
struct Recorder {
    key: &'static str,
    log: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn new(key: &'static str, log: Arc<Mutex<Vec<String>>>) -> Arc<Self> {
        Arc::new(Self { key, log })
    }
}

#[async_trait]
impl Subscriber for Recorder {
    async fn notify(&self, message: &str) -> Result<(), String> {
        self.log.lock().unwrap().push(format!("{}:{}", self.key, message));
        Ok(())
    }
}

/// Test subscriber whose handler always errors.
struct BrokenPrinter;

#[async_trait]
impl Subscriber for BrokenPrinter {
    async fn notify(&self, _message: &str) -> Result<(), String> {
        Err("printer on fire".to_string())
    }
}

/// Test subscriber whose handler panics outright.
struct PanickyPager;

#[async_trait]
impl Subscriber for PanickyPager {
    async fn notify(&self, _message: &str) -> Result<(), String> {
        panic!("pager battery exploded");
    }
}

/// Subscribing twice under the same key leaves exactly one subscription:
/// a publish afterwards delivers exactly once.
#[tokio::test]
async fn test_duplicate_subscribe_is_idempotent() {
    let (actor, client) = notifier::new();
    tokio::spawn(actor.run());

    let log = Arc::new(Mutex::new(Vec::new()));
    let chef = Recorder::new("chef", log.clone());

    assert!(client.subscribe("chef", chef.clone()).await.unwrap());
    assert!(!client.subscribe("chef", chef).await.unwrap());

    let report = client.publish("Order up").await.unwrap();
    assert_eq!(report.delivered, 1);
    assert!(report.is_clean());
    assert_eq!(*log.lock().unwrap(), vec!["chef:Order up"]);
}

/// Unsubscribing a never-subscribed key is a no-op, not an error.
#[tokio::test]
async fn test_unsubscribe_absent_key_is_a_noop() {
    let (actor, client) = notifier::new();
    tokio::spawn(actor.run());

    assert!(!client.unsubscribe("ghost").await.unwrap());
}

/// Messages are delivered in subscription order, and an unsubscribed
/// subscriber stops receiving them.
#[tokio::test]
async fn test_fan_out_follows_subscription_order() {
    let (actor, client) = notifier::new();
    tokio::spawn(actor.run());

    let log = Arc::new(Mutex::new(Vec::new()));
    client
        .subscribe("chef", Recorder::new("chef", log.clone()))
        .await
        .unwrap();
    client
        .subscribe("waiter", Recorder::new("waiter", log.clone()))
        .await
        .unwrap();
    client
        .subscribe("customer", Recorder::new("customer", log.clone()))
        .await
        .unwrap();

    client.publish("A").await.unwrap();
    assert_eq!(
        *log.lock().unwrap(),
        vec!["chef:A", "waiter:A", "customer:A"]
    );

    assert!(client.unsubscribe("waiter").await.unwrap());

    client.publish("B").await.unwrap();
    assert_eq!(
        *log.lock().unwrap(),
        vec!["chef:A", "waiter:A", "customer:A", "chef:B", "customer:B"]
    );
}

/// One failing handler does not block delivery to the rest; the failure is
/// aggregated into the report instead of aborting the fan-out.
#[tokio::test]
async fn test_failing_subscriber_does_not_block_the_rest() {
    let (actor, client) = notifier::new();
    tokio::spawn(actor.run());

    let log = Arc::new(Mutex::new(Vec::new()));
    client.subscribe("printer", Arc::new(BrokenPrinter)).await.unwrap();
    client
        .subscribe("chef", Recorder::new("chef", log.clone()))
        .await
        .unwrap();

    let report = client.publish("Order up").await.unwrap();

    assert_eq!(report.delivered, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].subscriber, "printer");
    assert_eq!(report.failures[0].reason, "printer on fire");

    // The subscriber after the failing one still got the message
    assert_eq!(*log.lock().unwrap(), vec!["chef:Order up"]);
}

/// A panicking handler is contained by the per-delivery fault boundary: the
/// notifier survives and keeps serving later publishes.
#[tokio::test]
async fn test_panicking_subscriber_is_contained() {
    let (actor, client) = notifier::new();
    tokio::spawn(actor.run());

    let log = Arc::new(Mutex::new(Vec::new()));
    client.subscribe("pager", Arc::new(PanickyPager)).await.unwrap();
    client
        .subscribe("chef", Recorder::new("chef", log.clone()))
        .await
        .unwrap();

    let report = client.publish("first").await.unwrap();
    assert_eq!(report.delivered, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].subscriber, "pager");
    assert_eq!(report.failures[0].reason, "subscriber panicked");

    // The notifier is still alive and still delivering
    client.unsubscribe("pager").await.unwrap();
    let report = client.publish("second").await.unwrap();
    assert!(report.is_clean());
    assert_eq!(*log.lock().unwrap(), vec!["chef:first", "chef:second"]);
}
