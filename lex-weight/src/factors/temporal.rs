use chrono::NaiveDate;

/// Temporal decay factor for a cited case, stepped by age:
/// 1.0 within 5 years, 0.8 within 10, 0.6 within 20, 0.4 older.
///
/// `as_of` is the evaluation date — "now" for live scoring, the query
/// date for point-in-time validity resolution. A decision dated after
/// `as_of` gets full weight (age clamps at zero).
pub fn calculate(decision_date: NaiveDate, as_of: NaiveDate) -> f64 {
    let years = years_between(decision_date, as_of);
    match years {
        0..=5 => 1.0,
        6..=10 => 0.8,
        11..=20 => 0.6,
        _ => 0.4,
    }
}

/// Whole years elapsed, floored at zero.
fn years_between(from: NaiveDate, to: NaiveDate) -> i64 {
    if to <= from {
        return 0;
    }
    // Day-count division is close enough for 5/10/20-year steps.
    (to - from).num_days() / 365
}
