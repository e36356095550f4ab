use crate::errors::{Result, ValidationError};
use crate::portfolio::portfolio_model::Holding;
use crate::portfolio::valuation::ValuationPoint;

use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};

// property_id -> monthly history
pub type PropertyHistoryMap = HashMap<i64, Vec<ValuationPoint>>;

/// Aggregates property histories into a weighted portfolio valuation series.
///
/// The first holding's history is the anchor: the result has one point per
/// anchor date, valued at `Σ weight × value` of every holding on that same
/// calendar date. No rounding is applied.
///
/// Every holding must have a history covering exactly the anchor dates. A
/// missing history, a missing date or an extra date is reported as a
/// validation error instead of being zero-filled.
pub fn aggregate_portfolio_history(
    holdings: &[Holding],
    histories: &PropertyHistoryMap,
) -> Result<Vec<ValuationPoint>> {
    let Some(first) = holdings.first() else {
        debug!("Portfolio has no holdings. Returning empty history.");
        return Ok(Vec::new());
    };

    let anchor = history_for(first.property_id, histories)?;
    let anchor_dates: HashSet<NaiveDate> = anchor.iter().map(|p| p.date).collect();
    let mut totals = vec![Decimal::ZERO; anchor.len()];

    for holding in holdings {
        let history = history_for(holding.property_id, histories)?;

        if let Some(extra) = history.iter().find(|p| !anchor_dates.contains(&p.date)) {
            warn!(
                "History for property {} has a valuation on {} outside the portfolio range",
                holding.property_id, extra.date
            );
            return Err(ValidationError::MisalignedHistory {
                property_id: holding.property_id,
                date: extra.date,
            }
            .into());
        }

        let by_date: HashMap<NaiveDate, Decimal> =
            history.iter().map(|p| (p.date, p.value)).collect();

        for (total, point) in totals.iter_mut().zip(anchor) {
            let value = by_date.get(&point.date).ok_or_else(|| {
                warn!(
                    "History for property {} is missing {}",
                    holding.property_id, point.date
                );
                ValidationError::MisalignedHistory {
                    property_id: holding.property_id,
                    date: point.date,
                }
            })?;
            *total += holding.weight * *value;
        }
    }

    Ok(anchor
        .iter()
        .zip(totals)
        .map(|(point, value)| ValuationPoint::new(point.date, value))
        .collect())
}

fn history_for(property_id: i64, histories: &PropertyHistoryMap) -> Result<&[ValuationPoint]> {
    match histories.get(&property_id) {
        Some(history) if !history.is_empty() => Ok(history.as_slice()),
        _ => Err(ValidationError::MissingHistory(property_id).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use rust_decimal_macros::dec;

    fn month(m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, 1).unwrap()
    }

    fn series(values: &[Decimal]) -> Vec<ValuationPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| ValuationPoint::new(month(i as u32 + 1), *v))
            .collect()
    }

    fn holding(property_id: i64, weight: Decimal) -> Holding {
        Holding {
            property_id,
            weight,
        }
    }

    #[test]
    fn test_weighted_sum_per_month() {
        let mut histories = PropertyHistoryMap::new();
        histories.insert(1, series(&[dec!(100), dec!(110), dec!(121)]));
        histories.insert(2, series(&[dec!(200), dec!(190), dec!(180)]));

        let holdings = vec![holding(1, dec!(0.7)), holding(2, dec!(0.3))];
        let result = aggregate_portfolio_history(&holdings, &histories).unwrap();

        let values: Vec<Decimal> = result.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![dec!(130), dec!(134), dec!(138.7)]);
        assert_eq!(result[0].date, month(1));
        assert_eq!(result[2].date, month(3));
    }

    #[test]
    fn test_aggregates_by_date_not_position() {
        let mut histories = PropertyHistoryMap::new();
        histories.insert(1, series(&[dec!(100), dec!(200)]));
        // Same dates, stored out of order
        histories.insert(
            2,
            vec![
                ValuationPoint::new(month(2), dec!(40)),
                ValuationPoint::new(month(1), dec!(20)),
            ],
        );

        let holdings = vec![holding(1, dec!(1)), holding(2, dec!(0.5))];
        let result = aggregate_portfolio_history(&holdings, &histories).unwrap();

        assert_eq!(result[0].value, dec!(110));
        assert_eq!(result[1].value, dec!(220));
    }

    #[test]
    fn test_shorter_history_is_rejected() {
        let mut histories = PropertyHistoryMap::new();
        histories.insert(1, series(&[dec!(100), dec!(110), dec!(121)]));
        histories.insert(2, series(&[dec!(200), dec!(190)]));

        let holdings = vec![holding(1, dec!(0.5)), holding(2, dec!(0.5))];
        let result = aggregate_portfolio_history(&holdings, &histories);

        match result {
            Err(Error::Validation(ValidationError::MisalignedHistory { property_id, date })) => {
                assert_eq!(property_id, 2);
                assert_eq!(date, month(3));
            }
            other => panic!("expected misaligned history, got {:?}", other),
        }
    }

    #[test]
    fn test_longer_history_is_rejected() {
        let mut histories = PropertyHistoryMap::new();
        histories.insert(1, series(&[dec!(100), dec!(110)]));
        histories.insert(2, series(&[dec!(200), dec!(190), dec!(180)]));

        let holdings = vec![holding(1, dec!(0.5)), holding(2, dec!(0.5))];
        let result = aggregate_portfolio_history(&holdings, &histories);

        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::MisalignedHistory {
                property_id: 2,
                ..
            }))
        ));
    }

    #[test]
    fn test_missing_property_history_is_rejected() {
        let mut histories = PropertyHistoryMap::new();
        histories.insert(1, series(&[dec!(100)]));

        let holdings = vec![holding(1, dec!(0.5)), holding(9, dec!(0.5))];
        let result = aggregate_portfolio_history(&holdings, &histories);

        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::MissingHistory(9)))
        ));
    }

    #[test]
    fn test_no_holdings_yields_empty_history() {
        let histories = PropertyHistoryMap::new();
        let result = aggregate_portfolio_history(&[], &histories).unwrap();
        assert!(result.is_empty());
    }
}
