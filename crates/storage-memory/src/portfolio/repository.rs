use std::sync::Arc;

use deedflow_core::portfolio::{Portfolio, PortfolioRepositoryTrait};
use deedflow_core::Result;

use crate::store::MemoryStore;

/// Read-only access to the seeded portfolios.
pub struct PortfolioRepository {
    store: Arc<MemoryStore>,
}

impl PortfolioRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        PortfolioRepository { store }
    }
}

impl PortfolioRepositoryTrait for PortfolioRepository {
    fn list(&self) -> Result<Vec<Portfolio>> {
        Ok(self.store.portfolios.read()?.clone())
    }

    fn get_by_id(&self, portfolio_id: i64) -> Result<Option<Portfolio>> {
        let portfolios = self.store.portfolios.read()?;
        Ok(portfolios.iter().find(|p| p.id == portfolio_id).cloned())
    }
}
