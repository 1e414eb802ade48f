use std::fmt;

/// Represents one recorded cost in the billing registry.
///
/// # Registry Framework
/// This struct implements the [`RegistryEntry`](crate::framework::RegistryEntry) trait,
/// allowing it to be managed by a [`RegistryActor`](crate::framework::RegistryActor).
///
/// Cost entries are immutable once appended; the registry rejects updates.
#[derive(Debug, Clone, PartialEq)]
pub struct CostEntry {
    /// 1-based insertion ordinal, assigned by the registry.
    pub seq: u64,
    /// Currency amount. No sign or range validation by contract.
    pub amount: f64,
}

/// A snapshot of the billing registry plus its running total.
///
/// The total is standard f64 addition in encounter order; rounding happens
/// only at display time (two decimal places per entry and for the total).
#[derive(Debug, Clone)]
pub struct CostStatement {
    pub amounts: Vec<f64>,
}

impl CostStatement {
    /// Arithmetic sum of all recorded amounts, in insertion order.
    pub fn total(&self) -> f64 {
        self.amounts.iter().sum()
    }
}

impl fmt::Display for CostStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "------All Order Costs-----")?;

        if self.amounts.is_empty() {
            writeln!(f, "    No Orders Yet")?;
        } else {
            for (i, amount) in self.amounts.iter().enumerate() {
                writeln!(f, "Order {} : ${:.2}", i + 1, amount)?;
            }
            writeln!(f, "---------------------------")?;
            writeln!(f, "Total costs = ${:.2}", self.total())?;
        }
        Ok(())
    }
}
