//! Demo data loaded at startup.
//!
//! Four listed properties with generated histories, three weighted portfolios
//! over them and a single exchange for the landing page.

use chrono::NaiveDate;
use log::info;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use deedflow_core::constants::DEFAULT_HISTORY_MONTHS;
use deedflow_core::markets::{Market, MarketStatus, MarketTrend};
use deedflow_core::portfolio::valuation::{generate_history, HistoryParams, PropertyHistoryMap};
use deedflow_core::portfolio::{Holding, Portfolio};
use deedflow_core::properties::Property;
use deedflow_core::utils::RandomSource;
use deedflow_core::Result;

use crate::store::MemoryStore;

struct SeedProperty {
    id: i64,
    name: &'static str,
    location: &'static str,
    price: Decimal,
    symbol: &'static str,
    change: Decimal,
    volatility: Decimal,
}

fn seed_properties() -> [SeedProperty; 4] {
    [
        SeedProperty {
            id: 1,
            name: "Oceanview Condos",
            location: "Coastline",
            price: dec!(1200000),
            symbol: "OVC",
            change: dec!(2.5),
            volatility: dec!(0.03),
        },
        SeedProperty {
            id: 2,
            name: "Downtown Loft",
            location: "City Center",
            price: dec!(800000),
            symbol: "DLT",
            change: dec!(-1.2),
            volatility: dec!(0.04),
        },
        SeedProperty {
            id: 3,
            name: "Tech Hub Office",
            location: "Silicon Valley",
            price: dec!(2500000),
            symbol: "THO",
            change: dec!(5.8),
            volatility: dec!(0.035),
        },
        SeedProperty {
            id: 4,
            name: "Riverside Apartments",
            location: "Waterfront",
            price: dec!(1500000),
            symbol: "RVA",
            change: dec!(3.2),
            volatility: dec!(0.025),
        },
    ]
}

fn portfolio(id: i64, name: &str, holdings: &[(i64, Decimal)]) -> Portfolio {
    Portfolio {
        id,
        name: name.to_string(),
        holdings: holdings
            .iter()
            .map(|(property_id, weight)| Holding {
                property_id: *property_id,
                weight: *weight,
            })
            .collect(),
    }
}

fn seed_portfolios() -> Vec<Portfolio> {
    vec![
        portfolio(1, "Income Focused", &[(1, dec!(0.7)), (2, dec!(0.3))]),
        portfolio(2, "Growth Focused", &[(1, dec!(0.3)), (2, dec!(0.7))]),
        portfolio(3, "Balanced Portfolio", &[(1, dec!(0.4)), (3, dec!(0.6))]),
    ]
}

fn seed_markets() -> Vec<Market> {
    vec![Market {
        id: "RCX".to_string(),
        name: "Property Stock Exchange".to_string(),
        status: MarketStatus::Open,
        volume: "2.3M".to_string(),
        trend: MarketTrend::Up,
    }]
}

/// Replaces the store contents with the demo data set. Every property history
/// ends in the month of `end_month`.
pub fn seed_demo_data(
    store: &MemoryStore,
    end_month: NaiveDate,
    rng: &dyn RandomSource,
) -> Result<()> {
    let mut rows = Vec::new();
    let mut histories = PropertyHistoryMap::new();
    for seed in seed_properties() {
        let history = generate_history(
            HistoryParams {
                base: seed.price,
                months: DEFAULT_HISTORY_MONTHS,
                volatility: seed.volatility,
            },
            end_month,
            rng,
        )?;
        histories.insert(seed.id, history);
        rows.push(Property {
            id: seed.id,
            name: seed.name.to_string(),
            location: seed.location.to_string(),
            price: seed.price,
            symbol: Some(seed.symbol.to_string()),
            change: Some(seed.change),
        });
    }

    let portfolios = seed_portfolios();
    let markets = seed_markets();
    info!(
        "Seeded {} properties, {} portfolios and {} markets",
        rows.len(),
        portfolios.len(),
        markets.len()
    );

    {
        let mut table = store.properties.write()?;
        table.rows = rows;
        table.histories = histories;
    }
    *store.portfolios.write()? = portfolios;
    *store.markets.write()? = markets;
    Ok(())
}
