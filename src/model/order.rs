use serde::{Deserialize, Serialize};
use std::fmt;

/// The status every order starts with. Kitchen-side logic moves it along later.
pub const STATUS_PREPARING: &str = "Preparing";

/// Represents one submitted order in the restaurant.
///
/// # Registry Framework
/// This struct implements the [`RegistryEntry`](crate::framework::RegistryEntry) trait,
/// allowing it to be managed by a [`RegistryActor`](crate::framework::RegistryActor).
///
/// The `status` field is an opaque string: the registry stores it and prints it
/// back but never interprets it. Whatever drives the kitchen workflow decides
/// what the values mean (the stock flow uses "Preparing" and "DONE").
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// 1-based insertion ordinal, assigned by the registry.
    pub seq: u64,
    pub customer: String,
    pub description: String,
    pub status: String,
}

impl Order {
    /// Creates a new Order instance with the default "Preparing" status.
    ///
    /// # Notes
    /// The `seq` field is initialized to zero and will be set by the registry.
    pub fn new(customer: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            seq: 0,
            customer: customer.into(),
            description: description.into(),
            status: STATUS_PREPARING.to_string(),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.customer, self.description)
    }
}

/// Payload for submitting a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer: String,
    pub description: String,
}

/// DTO for order status updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: String,
}

/// A snapshot of the order registry in display form.
///
/// Rendering keeps the original console layout: an ordinal label per order,
/// the record line, and its stored status. The empty case prints an explicit
/// "No Orders Yet" marker rather than a blank body.
#[derive(Debug, Clone)]
pub struct OrderBoard {
    pub orders: Vec<Order>,
}

impl fmt::Display for OrderBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== ALL ORDERS =====")?;

        if self.orders.is_empty() {
            writeln!(f, "    No Orders Yet")?;
        } else {
            for (i, order) in self.orders.iter().enumerate() {
                writeln!(f, "------------------------")?;
                writeln!(f, "Order {}:", i + 1)?;
                writeln!(f, "{}", order)?;
                writeln!(f, "Status: {}", order.status)?;
            }
            writeln!(f, "========================")?;
        }
        Ok(())
    }
}
