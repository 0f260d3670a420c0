//! KPI aggregates computed from the full, unfiltered collection.
//!
//! Everything here is pure and recomputed on every render.

use chrono::{Local, NaiveDate};

/// Number of records satisfying the predicate
pub fn count<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    items.iter().filter(|item| predicate(item)).count()
}

/// Sum of a numeric field; missing and non-finite values count as 0
pub fn sum<T>(items: &[T], selector: impl Fn(&T) -> Option<f64>) -> f64 {
    items
        .iter()
        .filter_map(|item| selector(item))
        .filter(|v| v.is_finite())
        .sum()
}

/// Share of records satisfying the predicate, 0 for an empty collection
pub fn ratio<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    count(items, predicate) as f64 / items.len() as f64
}

/// [`ratio`] expressed in percent
pub fn percentage<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> f64 {
    ratio(items, predicate) * 100.0
}

/// Today's date in the browser's time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole days from `today` to `date`, negative when the date has passed
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// Where a date stands relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueState {
    Expired,
    DueToday,
    ExpiringSoon,
    Later,
}

impl DueState {
    pub fn classify(date: NaiveDate, today: NaiveDate, horizon_days: i64) -> Self {
        match days_until(date, today) {
            d if d < 0 => DueState::Expired,
            0 => DueState::DueToday,
            d if d <= horizon_days => DueState::ExpiringSoon,
            _ => DueState::Later,
        }
    }
}

/// True iff `0 < days_until(date) <= horizon_days`
pub fn expiring_soon(date: NaiveDate, today: NaiveDate, horizon_days: i64) -> bool {
    DueState::classify(date, today, horizon_days) == DueState::ExpiringSoon
}

/// Same as [`expiring_soon`] for an optional date field
pub fn expiring_soon_opt(date: Option<NaiveDate>, today: NaiveDate, horizon_days: i64) -> bool {
    date.map(|d| expiring_soon(d, today, horizon_days))
        .unwrap_or(false)
}

/// True iff the optional date is strictly before today
pub fn is_past(date: Option<NaiveDate>, today: NaiveDate) -> bool {
    date.map(|d| days_until(d, today) < 0).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today_fixed() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_ratio_on_empty_collection_is_zero() {
        let empty: Vec<u32> = Vec::new();
        let r = ratio(&empty, |_| true);
        assert_eq!(r, 0.0);
        assert!(!r.is_nan());
        assert_eq!(percentage(&empty, |_| true), 0.0);
    }

    #[test]
    fn test_ratio_and_count() {
        let items = vec![1, 2, 3, 4];
        assert_eq!(count(&items, |v| v % 2 == 0), 2);
        assert_eq!(ratio(&items, |v| *v > 3), 0.25);
        assert_eq!(percentage(&items, |v| *v > 1), 75.0);
    }

    #[test]
    fn test_sum_treats_missing_as_zero() {
        let items = vec![Some(10.5), None, Some(-0.5), Some(f64::NAN)];
        assert_eq!(sum(&items, |v| *v), 10.0);
        let empty: Vec<Option<f64>> = Vec::new();
        assert_eq!(sum(&empty, |v| *v), 0.0);
    }

    #[test]
    fn test_expiring_soon_boundaries() {
        let t = today_fixed();
        assert!(!expiring_soon(t + Duration::days(31), t, 30));
        assert!(expiring_soon(t + Duration::days(30), t, 30));
        assert!(expiring_soon(t + Duration::days(15), t, 30));
        assert!(expiring_soon(t + Duration::days(1), t, 30));
        assert!(!expiring_soon(t - Duration::days(1), t, 30));
    }

    #[test]
    fn test_today_is_its_own_state() {
        let t = today_fixed();
        assert!(!expiring_soon(t, t, 30));
        assert_eq!(DueState::classify(t, t, 30), DueState::DueToday);
        assert_eq!(
            DueState::classify(t - Duration::days(3), t, 30),
            DueState::Expired
        );
        assert_eq!(
            DueState::classify(t + Duration::days(90), t, 30),
            DueState::Later
        );
        assert!(!is_past(Some(t), t));
    }

    #[test]
    fn test_optional_dates() {
        let t = today_fixed();
        assert!(!expiring_soon_opt(None, t, 30));
        assert!(expiring_soon_opt(Some(t + Duration::days(2)), t, 30));
        assert!(is_past(Some(t - Duration::days(1)), t));
        assert!(!is_past(None, t));
    }
}
