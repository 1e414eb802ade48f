use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use order_desk::model::OrderCreate;
use order_desk::notifier::Subscriber;
use order_desk::runtime::Restaurant;

struct Recorder {
    log: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl Subscriber for Recorder {
    async fn notify(&self, message: &str) -> Result<(), String> {
        self.log.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

/// Full end-to-end flow through the composition root: take orders, bill them,
/// notify the kitchen, finish an order, and render both console views.
#[tokio::test]
async fn test_full_restaurant_flow() {
    let restaurant = Restaurant::new();

    let chef_log = Arc::new(Mutex::new(Vec::new()));
    restaurant
        .notifier
        .subscribe("chef", Arc::new(Recorder { log: chef_log.clone() }))
        .await
        .expect("Failed to subscribe chef");

    // Take two orders and bill them
    let first = restaurant
        .orders
        .add_order(OrderCreate {
            customer: "Alia".to_string(),
            description: "Falafel plate".to_string(),
        })
        .await
        .expect("Failed to add first order");
    restaurant
        .billing
        .add_cost(7.0)
        .await
        .expect("Failed to bill first order");

    restaurant
        .orders
        .add_order(OrderCreate {
            customer: "Omar".to_string(),
            description: "Lamb kebab".to_string(),
        })
        .await
        .expect("Failed to add second order");
    restaurant
        .billing
        .add_cost(14.5)
        .await
        .expect("Failed to bill second order");

    let report = restaurant
        .notifier
        .publish("New order placed")
        .await
        .expect("Failed to publish");
    assert_eq!(report.delivered, 1);

    // Kitchen finishes the first order
    restaurant
        .orders
        .update_status(first, "DONE")
        .await
        .expect("Failed to update status");
    restaurant
        .notifier
        .publish("Order 1 is ready")
        .await
        .expect("Failed to publish");

    assert_eq!(
        *chef_log.lock().unwrap(),
        vec!["New order placed", "Order 1 is ready"]
    );

    // The order board shows both orders, in order, with their statuses
    let board = restaurant.orders.board().await.unwrap().to_string();
    let expected_board = "\
===== ALL ORDERS =====
------------------------
Order 1:
Alia - Falafel plate
Status: DONE
------------------------
Order 2:
Omar - Lamb kebab
Status: Preparing
========================
";
    assert_eq!(board, expected_board);

    // The billing statement shows both costs and the running total
    let statement = restaurant.billing.statement().await.unwrap().to_string();
    let expected_statement = "\
------All Order Costs-----
Order 1 : $7.00
Order 2 : $14.50
---------------------------
Total costs = $21.50
";
    assert_eq!(statement, expected_statement);

    restaurant
        .shutdown()
        .await
        .expect("Restaurant failed to shut down cleanly");
}

/// The registries are independent: before anything is recorded, both console
/// views render their explicit empty markers.
#[tokio::test]
async fn test_fresh_restaurant_renders_empty_views() {
    let restaurant = Restaurant::new();

    let board = restaurant.orders.board().await.unwrap().to_string();
    assert!(board.contains("No Orders Yet"));

    let statement = restaurant.billing.statement().await.unwrap().to_string();
    assert!(statement.contains("No Orders Yet"));

    restaurant.shutdown().await.expect("Shutdown failed");
}
