//! Portfolio module - weighted holdings, aggregated valuation history and metrics.

pub mod performance;
pub mod portfolio_model;
mod portfolio_service;
mod portfolio_traits;
pub mod valuation;

pub use portfolio_model::{Holding, Portfolio};
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
