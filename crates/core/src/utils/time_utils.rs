use chrono::{Datelike, Months, NaiveDate, Utc};

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the current UTC month.
pub fn current_month() -> NaiveDate {
    first_of_month(Utc::now().date_naive())
}

/// Returns `count` month starts in chronological order, the last one being the
/// month of `end`.
pub fn month_starts_ending_at(end: NaiveDate, count: u32) -> Vec<NaiveDate> {
    let anchor = first_of_month(end);
    (0..count)
        .rev()
        .filter_map(|back| anchor.checked_sub_months(Months::new(back)))
        .collect()
}
