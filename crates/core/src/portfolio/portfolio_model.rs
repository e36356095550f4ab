//! Portfolio domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named set of weighted property holdings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: i64,
    pub name: String,
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn property_ids(&self) -> Vec<i64> {
        self.holdings.iter().map(|h| h.property_id).collect()
    }
}

/// Partial ownership of a property. Weights across a portfolio need not sum to one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub property_id: i64,
    pub weight: Decimal,
}
