use crate::errors::Result;
use crate::markets::markets_model::Market;

pub trait MarketRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<Market>>;
}

pub trait MarketServiceTrait: Send + Sync {
    fn get_markets(&self) -> Result<Vec<Market>>;
}
