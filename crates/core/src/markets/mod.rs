//! Markets module - the exchanges listed on the landing page.

mod markets_model;
mod markets_service;
mod markets_traits;

pub use markets_model::{Market, MarketStatus, MarketTrend};
pub use markets_service::MarketService;
pub use markets_traits::{MarketRepositoryTrait, MarketServiceTrait};
