use crate::errors::Result;
use crate::portfolio::performance::{calculate_portfolio_metrics, PortfolioMetrics};
use crate::portfolio::portfolio_model::Portfolio;
use crate::portfolio::portfolio_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
use crate::portfolio::valuation::{aggregate_portfolio_history, ValuationPoint};
use crate::properties::PropertyRepositoryTrait;
use crate::utils::random::RandomSource;
use log::debug;
use std::sync::Arc;

pub struct PortfolioService {
    portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
    property_repository: Arc<dyn PropertyRepositoryTrait>,
    random: Arc<dyn RandomSource>,
}

impl PortfolioService {
    pub fn new(
        portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
        property_repository: Arc<dyn PropertyRepositoryTrait>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        PortfolioService {
            portfolio_repository,
            property_repository,
            random,
        }
    }

    fn history_for(&self, portfolio: &Portfolio) -> Result<Vec<ValuationPoint>> {
        let histories = self
            .property_repository
            .get_histories(&portfolio.property_ids())?;
        aggregate_portfolio_history(&portfolio.holdings, &histories)
    }
}

impl PortfolioServiceTrait for PortfolioService {
    fn get_portfolios(&self) -> Result<Vec<Portfolio>> {
        self.portfolio_repository.list()
    }

    fn get_portfolio(&self, portfolio_id: i64) -> Result<Option<Portfolio>> {
        self.portfolio_repository.get_by_id(portfolio_id)
    }

    fn get_portfolio_history(&self, portfolio_id: i64) -> Result<Vec<ValuationPoint>> {
        match self.portfolio_repository.get_by_id(portfolio_id)? {
            Some(portfolio) => self.history_for(&portfolio),
            None => {
                debug!("Portfolio {} not found. Returning empty history.", portfolio_id);
                Ok(Vec::new())
            }
        }
    }

    fn get_portfolio_metrics(&self, portfolio_id: i64) -> Result<Option<PortfolioMetrics>> {
        let history = self.get_portfolio_history(portfolio_id)?;
        Ok(calculate_portfolio_metrics(
            portfolio_id,
            &history,
            self.random.as_ref(),
        ))
    }

    fn compare_metrics(&self, portfolio_ids: &[i64]) -> Result<Vec<Option<PortfolioMetrics>>> {
        portfolio_ids
            .iter()
            .map(|id| self.get_portfolio_metrics(*id))
            .collect()
    }
}
