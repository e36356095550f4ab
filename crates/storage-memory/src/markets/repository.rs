use std::sync::Arc;

use deedflow_core::markets::{Market, MarketRepositoryTrait};
use deedflow_core::Result;

use crate::store::MemoryStore;

pub struct MarketRepository {
    store: Arc<MemoryStore>,
}

impl MarketRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        MarketRepository { store }
    }
}

impl MarketRepositoryTrait for MarketRepository {
    fn list(&self) -> Result<Vec<Market>> {
        Ok(self.store.markets.read()?.clone())
    }
}
