use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for returned metrics and percentages
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Number of monthly points generated for a newly listed property
pub const DEFAULT_HISTORY_MONTHS: u32 = 36;

/// Drift volatility applied to newly listed properties
pub const DEFAULT_HISTORY_VOLATILITY: Decimal = dec!(0.03);

/// Largest listing price accepted for a new property
pub const MAX_PROPERTY_PRICE: Decimal = dec!(1000000000000);

/// Synthetic valuations never fall below this value
pub const MIN_PROPERTY_VALUE: Decimal = dec!(1000);

/// Draws above this value push the walk up, so uniform draws trend upward.
pub const DRIFT_BIAS: Decimal = dec!(0.4);

/// Length of the ticker symbol derived from a property name
pub const SYMBOL_LENGTH: usize = 3;

/// Months per year, used to annualize mean monthly returns
pub const MONTHS_PER_YEAR: i64 = 12;
