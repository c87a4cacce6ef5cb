// Day counts relative to a due date (installments, contracts, invoices).
use chrono::{Local, NaiveDate};

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole days from today until `due_date`; negative once it has passed.
pub fn days_until_due(due_date: NaiveDate) -> i64 {
    days_until_due_from(due_date, today())
}

/// Whole days from `today` until `due_date`.
pub fn days_until_due_from(due_date: NaiveDate, today: NaiveDate) -> i64 {
    (due_date - today).num_days()
}

/// Days past `due_date`; 0 while it is still ahead.
pub fn days_overdue(due_date: NaiveDate) -> i64 {
    days_overdue_from(due_date, today())
}

pub fn days_overdue_from(due_date: NaiveDate, today: NaiveDate) -> i64 {
    (-days_until_due_from(due_date, today)).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_until_due_ahead() {
        assert_eq!(days_until_due_from(date(2024, 3, 15), date(2024, 3, 10)), 5);
    }

    #[test]
    fn test_days_until_due_past() {
        assert_eq!(days_until_due_from(date(2024, 3, 7), date(2024, 3, 10)), -3);
        assert_eq!(days_overdue_from(date(2024, 3, 7), date(2024, 3, 10)), 3);
    }

    #[test]
    fn test_days_until_due_across_month_and_leap_day() {
        assert_eq!(days_until_due_from(date(2024, 3, 1), date(2024, 2, 28)), 2);
    }

    #[test]
    fn test_days_overdue_not_yet_due() {
        assert_eq!(days_overdue_from(date(2024, 3, 15), date(2024, 3, 10)), 0);
        assert_eq!(days_overdue_from(date(2024, 3, 10), date(2024, 3, 10)), 0);
    }

    #[test]
    fn test_relative_to_today() {
        let now = today();
        assert_eq!(days_until_due(now + Duration::days(5)), 5);
        assert_eq!(days_until_due(now - Duration::days(3)), -3);
        assert_eq!(days_overdue(now - Duration::days(3)), 3);
        assert_eq!(days_overdue(now + Duration::days(3)), 0);
    }
}
