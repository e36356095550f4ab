//! Property domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::SYMBOL_LENGTH;
use crate::portfolio::performance::ValuationMetrics;
use crate::portfolio::valuation::ValuationPoint;

/// A listed property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub price: Decimal,
    pub symbol: Option<String>,
    /// Percent change shown on listing cards
    pub change: Option<Decimal>,
}

/// Input model for listing a new property
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub name: String,
    #[serde(default)]
    pub location: String,
    pub price: Decimal,
}

/// A validated property with derived fields and its generated history, ready
/// to be appended by a repository that assigns the id.
#[derive(Debug, Clone)]
pub struct PropertyDraft {
    pub name: String,
    pub location: String,
    pub price: Decimal,
    pub symbol: Option<String>,
    pub change: Option<Decimal>,
    pub history: Vec<ValuationPoint>,
}

impl PropertyDraft {
    pub fn into_property(self, id: i64) -> (Property, Vec<ValuationPoint>) {
        let property = Property {
            id,
            name: self.name,
            location: self.location,
            price: self.price,
            symbol: self.symbol,
            change: self.change,
        };
        (property, self.history)
    }
}

/// Property together with its history and metrics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetail {
    #[serde(flatten)]
    pub property: Property,
    pub history: Vec<ValuationPoint>,
    pub metrics: Option<ValuationMetrics>,
}

/// Ticker symbol derived from the first letters of a property name.
pub fn derive_symbol(name: &str) -> Option<String> {
    let symbol: String = name
        .trim()
        .chars()
        .take(SYMBOL_LENGTH)
        .collect::<String>()
        .to_uppercase();
    if symbol.is_empty() {
        None
    } else {
        Some(symbol)
    }
}
