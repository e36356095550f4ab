use crate::constants::{DISPLAY_DECIMAL_PRECISION, MONTHS_PER_YEAR};
use crate::portfolio::valuation::ValuationPoint;
use crate::utils::random::RandomSource;

use log::debug;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use super::{DecorativeMetrics, PortfolioMetrics, ReturnMetrics, ValuationMetrics};

const CAP_RATE_CENTER: Decimal = dec!(0.045);
const CAP_RATE_SPREAD: Decimal = dec!(0.01);
const OCCUPANCY_CENTER: Decimal = dec!(0.9);
const OCCUPANCY_SPREAD: Decimal = dec!(0.05);

/// Reduces a valuation series into total and annualized returns.
///
/// Returns `None` for an empty series.
pub fn calculate_return_metrics(history: &[ValuationPoint]) -> Option<ReturnMetrics> {
    let start = history.first()?.value;
    let end = history.last()?.value;

    let total_return = percent_change(start, end).map(round_display);

    Some(ReturnMetrics {
        total_value: end,
        total_return,
        annualized_return: annualized_return(history).map(round_display),
    })
}

/// `((1 + mean(monthly returns))^12 - 1) * 100`, unrounded.
pub fn annualized_return(history: &[ValuationPoint]) -> Option<Decimal> {
    if history.len() < 2 {
        return None;
    }

    let monthly: Option<Vec<Decimal>> = history
        .windows(2)
        .map(|pair| (pair[1].value - pair[0].value).checked_div(pair[0].value))
        .collect();
    let monthly = monthly?;

    let count = Decimal::from(monthly.len());
    let mean = monthly.iter().sum::<Decimal>() / count;
    let growth = (Decimal::ONE + mean).checked_powi(MONTHS_PER_YEAR)?;
    Some((growth - Decimal::ONE) * Decimal::ONE_HUNDRED)
}

/// Draws cap rate (4.5% ± 0.5%) and occupancy (90% ± 2.5%).
pub fn draw_decorative_metrics(rng: &dyn RandomSource) -> DecorativeMetrics {
    let cap_rate = CAP_RATE_CENTER + (rng.next_decimal() - dec!(0.5)) * CAP_RATE_SPREAD;
    let occupancy = OCCUPANCY_CENTER + (rng.next_decimal() - dec!(0.5)) * OCCUPANCY_SPREAD;
    DecorativeMetrics {
        cap_rate: round_display(cap_rate * Decimal::ONE_HUNDRED),
        occupancy: round_display(occupancy * Decimal::ONE_HUNDRED),
    }
}

/// Derived returns plus decorative noise for any valuation series.
pub fn calculate_valuation_metrics(
    history: &[ValuationPoint],
    rng: &dyn RandomSource,
) -> Option<ValuationMetrics> {
    let returns = calculate_return_metrics(history)?;
    Some(ValuationMetrics {
        returns,
        decorative: draw_decorative_metrics(rng),
    })
}

pub fn calculate_portfolio_metrics(
    portfolio_id: i64,
    history: &[ValuationPoint],
    rng: &dyn RandomSource,
) -> Option<PortfolioMetrics> {
    let Some(metrics) = calculate_valuation_metrics(history, rng) else {
        debug!("No history for portfolio {}. Metrics unavailable.", portfolio_id);
        return None;
    };
    Some(PortfolioMetrics {
        portfolio_id,
        metrics,
    })
}

fn percent_change(start: Decimal, end: Decimal) -> Option<Decimal> {
    (end - start)
        .checked_div(start)
        .map(|ratio| ratio * Decimal::ONE_HUNDRED)
}

fn round_display(value: Decimal) -> Decimal {
    value.round_dp(DISPLAY_DECIMAL_PRECISION)
}
