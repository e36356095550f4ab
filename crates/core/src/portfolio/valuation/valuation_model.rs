//! Portfolio valuation domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single monthly valuation. `date` is always the first of a month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValuationPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

impl ValuationPoint {
    pub fn new(date: NaiveDate, value: Decimal) -> Self {
        Self { date, value }
    }
}

/// Parameters for a synthetic monthly price walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryParams {
    pub base: Decimal,
    pub months: u32,
    pub volatility: Decimal,
}
