use crate::errors::Result;
use crate::markets::markets_model::Market;
use crate::markets::markets_traits::{MarketRepositoryTrait, MarketServiceTrait};
use std::sync::Arc;

pub struct MarketService {
    repository: Arc<dyn MarketRepositoryTrait>,
}

impl MarketService {
    pub fn new(repository: Arc<dyn MarketRepositoryTrait>) -> Self {
        MarketService { repository }
    }
}

impl MarketServiceTrait for MarketService {
    fn get_markets(&self) -> Result<Vec<Market>> {
        self.repository.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markets::{MarketStatus, MarketTrend};

    struct StaticMarkets;

    impl MarketRepositoryTrait for StaticMarkets {
        fn list(&self) -> Result<Vec<Market>> {
            Ok(vec![Market {
                id: "RCX".into(),
                name: "Property Stock Exchange".into(),
                status: MarketStatus::Open,
                volume: "2.3M".into(),
                trend: MarketTrend::Up,
            }])
        }
    }

    #[test]
    fn test_markets_serialize_lowercase_enums() {
        let service = MarketService::new(Arc::new(StaticMarkets));
        let markets = service.get_markets().unwrap();
        let json = serde_json::to_value(&markets).unwrap();
        assert_eq!(json[0]["status"], "open");
        assert_eq!(json[0]["trend"], "up");
    }
}
