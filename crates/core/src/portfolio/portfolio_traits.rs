use crate::errors::Result;
use crate::portfolio::performance::PortfolioMetrics;
use crate::portfolio::portfolio_model::Portfolio;
use crate::portfolio::valuation::ValuationPoint;

/// Trait for portfolio repository operations
pub trait PortfolioRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<Portfolio>>;
    fn get_by_id(&self, portfolio_id: i64) -> Result<Option<Portfolio>>;
}

/// Trait for portfolio service operations
pub trait PortfolioServiceTrait: Send + Sync {
    fn get_portfolios(&self) -> Result<Vec<Portfolio>>;

    fn get_portfolio(&self, portfolio_id: i64) -> Result<Option<Portfolio>>;

    /// Weighted monthly valuation series. Empty for an unknown portfolio.
    fn get_portfolio_history(&self, portfolio_id: i64) -> Result<Vec<ValuationPoint>>;

    /// Metrics for one portfolio. `None` when it is unknown or has no history.
    fn get_portfolio_metrics(&self, portfolio_id: i64) -> Result<Option<PortfolioMetrics>>;

    /// Metrics for each id, in input order.
    fn compare_metrics(&self, portfolio_ids: &[i64]) -> Result<Vec<Option<PortfolioMetrics>>>;
}
