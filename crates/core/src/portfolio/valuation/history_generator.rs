use chrono::NaiveDate;
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{DRIFT_BIAS, MIN_PROPERTY_VALUE};
use crate::errors::{Result, ValidationError};
use crate::utils::random::RandomSource;
use crate::utils::time_utils::month_starts_ending_at;

use super::{HistoryParams, ValuationPoint};

/// Generates a synthetic monthly valuation series ending in the month of `end_month`.
///
/// Each step applies a drift factor of `1 + (r - 0.4) * volatility`, where `r`
/// is drawn from `rng`, rounds to a whole currency unit and floors the result
/// at [`MIN_PROPERTY_VALUE`]. The walk starts from `params.base`, so the first
/// recorded point already carries one step of drift.
///
/// # Errors
///
/// Returns a validation error when `months` is zero, `base` is not positive or
/// `volatility` is negative.
pub fn generate_history(
    params: HistoryParams,
    end_month: NaiveDate,
    rng: &dyn RandomSource,
) -> Result<Vec<ValuationPoint>> {
    validate_params(&params)?;

    let dates = month_starts_ending_at(end_month, params.months);
    if dates.len() != params.months as usize {
        return Err(ValidationError::InvalidInput(format!(
            "Cannot walk {} months back from {}",
            params.months, end_month
        ))
        .into());
    }

    let mut value = params.base;
    let mut series = Vec::with_capacity(dates.len());
    for date in dates {
        let drift = (rng.next_decimal() - DRIFT_BIAS)
            .checked_mul(params.volatility)
            .and_then(|step| Decimal::ONE.checked_add(step));
        value = drift
            .and_then(|drift| value.checked_mul(drift))
            .ok_or_else(|| {
                ValidationError::InvalidInput(format!(
                    "History value overflowed walking from base {} (volatility {})",
                    params.base, params.volatility
                ))
            })?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .max(MIN_PROPERTY_VALUE);
        series.push(ValuationPoint::new(date, value));
    }

    debug!(
        "Generated {} month history from base {} (volatility {})",
        series.len(),
        params.base,
        params.volatility
    );
    Ok(series)
}

fn validate_params(params: &HistoryParams) -> Result<()> {
    if params.months == 0 {
        return Err(
            ValidationError::InvalidInput("History horizon must be at least one month".into())
                .into(),
        );
    }
    if params.base <= Decimal::ZERO {
        return Err(ValidationError::InvalidInput(format!(
            "History base value must be positive, got {}",
            params.base
        ))
        .into());
    }
    if params.volatility < Decimal::ZERO {
        return Err(ValidationError::InvalidInput(format!(
            "Volatility must not be negative, got {}",
            params.volatility
        ))
        .into());
    }
    Ok(())
}
