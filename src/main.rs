//! Console demo for the order-desk registries.
//!
//! Drives the three shared registries the way the original menu-driven
//! program would: submit orders, record their costs, notify the kitchen and
//! the customer, and print the order board and the billing statement.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn, Instrument};

use order_desk::model::OrderCreate;
use order_desk::notifier::Subscriber;
use order_desk::runtime::{setup_tracing, Restaurant};

/// The kitchen's side of the notifier: prints every message to the pass.
struct ChefStation;

#[async_trait]
impl Subscriber for ChefStation {
    async fn notify(&self, message: &str) -> Result<(), String> {
        println!("[Chef] {}", message);
        Ok(())
    }
}

/// The customer's side of the notifier.
struct CustomerPhone {
    name: String,
}

#[async_trait]
impl Subscriber for CustomerPhone {
    async fn notify(&self, message: &str) -> Result<(), String> {
        println!("[{}] {}", self.name, message);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting the order desk");

    // The composition root owns the single instance of each registry
    let restaurant = Restaurant::new();

    // Wire up the observers
    restaurant
        .notifier
        .subscribe("chef", Arc::new(ChefStation))
        .await
        .map_err(|e| e.to_string())?;
    restaurant
        .notifier
        .subscribe(
            "customer:alia",
            Arc::new(CustomerPhone { name: "Alia".to_string() }),
        )
        .await
        .map_err(|e| e.to_string())?;

    // Take a couple of orders and bill them
    let span = tracing::info_span!("order_intake");
    let first_order = async {
        let seq = restaurant
            .orders
            .add_order(OrderCreate {
                customer: "Alia".to_string(),
                description: "Falafel plate".to_string(),
            })
            .await
            .map_err(|e| e.to_string())?;
        restaurant
            .billing
            .add_cost(7.0)
            .await
            .map_err(|e| e.to_string())?;
        Ok::<u64, String>(seq)
    }
    .instrument(span)
    .await?;

    restaurant
        .orders
        .add_order(OrderCreate {
            customer: "Omar".to_string(),
            description: "Lamb kebab, extra bread".to_string(),
        })
        .await
        .map_err(|e| e.to_string())?;
    restaurant
        .billing
        .add_cost(14.5)
        .await
        .map_err(|e| e.to_string())?;

    let report = restaurant
        .notifier
        .publish("New order placed")
        .await
        .map_err(|e| e.to_string())?;
    info!(delivered = report.delivered, "Order announcement sent");

    // The kitchen finishes the first order
    restaurant
        .orders
        .update_status(first_order, "DONE")
        .await
        .map_err(|e| e.to_string())?;

    let report = restaurant
        .notifier
        .publish("Order 1 is ready")
        .await
        .map_err(|e| e.to_string())?;
    if !report.is_clean() {
        warn!(failed = report.failures.len(), "Some subscribers missed the announcement");
    }

    // Print the console views
    let board = restaurant.orders.board().await.map_err(|e| e.to_string())?;
    print!("{}", board);

    let statement = restaurant
        .billing
        .statement()
        .await
        .map_err(|e| e.to_string())?;
    print!("{}", statement);

    // Shutdown gracefully
    restaurant.shutdown().await?;

    info!("Order desk closed");
    Ok(())
}
