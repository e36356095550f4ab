use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Returns derived from a valuation series. These are reproducible for a given history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReturnMetrics {
    /// Last value of the series
    pub total_value: Decimal,
    /// Percent change from first to last value. `None` when the first value is zero.
    pub total_return: Option<Decimal>,
    /// Mean monthly return compounded over twelve months, in percent.
    /// `None` for single-point series or when a month starts from zero.
    pub annualized_return: Option<Decimal>,
}

/// Demo noise drawn from fixed bands. Not derived from any history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DecorativeMetrics {
    pub cap_rate: Decimal,
    pub occupancy: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValuationMetrics {
    #[serde(flatten)]
    pub returns: ReturnMetrics,
    #[serde(flatten)]
    pub decorative: DecorativeMetrics,
}

/// Metrics snapshot for one portfolio at query time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    pub portfolio_id: i64,
    #[serde(flatten)]
    pub metrics: ValuationMetrics,
}
