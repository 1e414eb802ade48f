//! Entry trait implementation for the CostEntry domain type.

use crate::framework::RegistryEntry;
use crate::model::CostEntry;
use async_trait::async_trait;

#[async_trait]
impl RegistryEntry for CostEntry {
    type AppendParams = f64;
    type UpdateParams = (); // Cost entries are immutable after insertion

    fn from_append_params(seq: u64, amount: f64) -> Result<Self, String> {
        Ok(Self { seq, amount })
    }

    async fn on_update(&mut self, _update: ()) -> Result<(), String> {
        Err("cost entries are immutable".to_string())
    }
}
