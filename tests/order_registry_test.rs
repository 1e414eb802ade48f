use order_desk::clients::registry_handle::RegistryHandle;
use order_desk::model::OrderCreate;
use order_desk::order_registry::{self, OrderError};

fn order(customer: &str, description: &str) -> OrderCreate {
    OrderCreate {
        customer: customer.to_string(),
        description: description.to_string(),
    }
}

/// For any sequence of add_order calls, the registry returns them in exact
/// insertion order with no loss or duplication.
#[tokio::test]
async fn test_orders_come_back_in_insertion_order() {
    let (actor, client) = order_registry::new();
    let handle = tokio::spawn(actor.run());

    let first = client.add_order(order("Alia", "Falafel plate")).await.unwrap();
    let second = client.add_order(order("Omar", "Lamb kebab")).await.unwrap();
    let third = client.add_order(order("Alia", "Mint tea")).await.unwrap();
    assert_eq!((first, second, third), (1, 2, 3));

    let orders = client.list().await.expect("Failed to list orders");
    assert_eq!(orders.len(), 3);
    assert_eq!(orders[0].description, "Falafel plate");
    assert_eq!(orders[1].description, "Lamb kebab");
    assert_eq!(orders[2].description, "Mint tea");

    // Every order starts in the default status
    assert!(orders.iter().all(|o| o.status == "Preparing"));

    drop(client);
    handle.await.unwrap();
}

/// Status updates flow through the registry and are stored verbatim.
#[tokio::test]
async fn test_status_update_is_visible_in_later_listing() {
    let (actor, client) = order_registry::new();
    tokio::spawn(actor.run());

    let seq = client.add_order(order("Omar", "Lamb kebab")).await.unwrap();

    let updated = client.update_status(seq, "DONE").await.unwrap();
    assert_eq!(updated.status, "DONE");

    let stored = client
        .get(seq)
        .await
        .expect("Failed to get order")
        .expect("Order not found");
    assert_eq!(stored.status, "DONE");

    // The status string is opaque; the registry accepts anything
    let updated = client.update_status(seq, "On the pass").await.unwrap();
    assert_eq!(updated.status, "On the pass");
}

/// Updating an order that was never added reports NotFound.
#[tokio::test]
async fn test_status_update_on_unknown_ordinal_fails() {
    let (actor, client) = order_registry::new();
    tokio::spawn(actor.run());

    let result = client.update_status(7, "DONE").await;
    assert_eq!(result, Err(OrderError::NotFound(7)));
}

/// The empty board renders an explicit marker, never a blank body.
#[tokio::test]
async fn test_empty_board_renders_no_orders_yet() {
    let (actor, client) = order_registry::new();
    tokio::spawn(actor.run());

    let board = client.board().await.unwrap();
    let rendered = board.to_string();
    assert_eq!(rendered, "===== ALL ORDERS =====\n    No Orders Yet\n");
}

/// End-to-end display: ordinal labels 1 and 2 in order, each followed by its
/// stored status line.
#[tokio::test]
async fn test_board_renders_ordinals_and_statuses() {
    let (actor, client) = order_registry::new();
    tokio::spawn(actor.run());

    client.add_order(order("Alia", "Falafel plate")).await.unwrap();
    client.add_order(order("Omar", "Lamb kebab")).await.unwrap();
    client.update_status(1, "DONE").await.unwrap();

    let rendered = client.board().await.unwrap().to_string();

    let order_1 = rendered.find("Order 1:").expect("missing first ordinal");
    let order_2 = rendered.find("Order 2:").expect("missing second ordinal");
    assert!(order_1 < order_2, "ordinals out of order:\n{}", rendered);

    assert!(rendered.contains("Alia - Falafel plate\nStatus: DONE\n"));
    assert!(rendered.contains("Omar - Lamb kebab\nStatus: Preparing\n"));
    assert!(!rendered.contains("No Orders Yet"));
}
