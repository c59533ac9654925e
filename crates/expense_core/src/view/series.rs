//! Time-bucketed spending series for trend charts.
//!
//! # Invariants
//! - Series are contiguous over their window: one bucket per day (week,
//!   month) or per calendar month (year), zero-valued buckets included.
//! - Buckets are in chronological order and end with the one containing
//!   `today`.

use crate::model::expense::Expense;
use chrono::{Datelike, Days, Months, NaiveDate};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Fixed trend windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeRange {
    /// Trailing 7 days, daily buckets.
    Week,
    /// Trailing 30 days, daily buckets.
    #[default]
    Month,
    /// Trailing 12 months, monthly buckets.
    Year,
}

impl TimeRange {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// First day covered by the window ending on `today`.
    pub fn start_date(self, today: NaiveDate) -> NaiveDate {
        let start = match self {
            Self::Week => today.checked_sub_days(Days::new(6)),
            Self::Month => today.checked_sub_days(Days::new(29)),
            Self::Year => today.checked_sub_months(Months::new(11)),
        };
        start.unwrap_or(NaiveDate::MIN)
    }

    fn label_format(self) -> &'static str {
        match self {
            Self::Week => "%a",
            Self::Month => "%b %-d",
            Self::Year => "%b",
        }
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "week" | "7d" => Ok(Self::Week),
            "month" | "30d" => Ok(Self::Month),
            "year" | "12m" => Ok(Self::Year),
            other => Err(format!(
                "unsupported time range `{other}`; expected week|month|year"
            )),
        }
    }
}

/// One slot of a time series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesBucket {
    /// Chart label: weekday, `Mon D`, or month name depending on range.
    pub label: String,
    /// First day of the bucket inside the window.
    pub start: NaiveDate,
    pub amount: f64,
}

/// Builds the gap-free series for `range` ending on `today`.
///
/// Expenses without a parseable date are ignored.
pub fn time_series(expenses: &[Expense], range: TimeRange, today: NaiveDate) -> Vec<SeriesBucket> {
    let start = range.start_date(today);
    let daily = daily_totals(expenses, start, today);
    let format = range.label_format();

    let mut buckets: Vec<SeriesBucket> = Vec::new();
    for day in start.iter_days().take_while(|day| *day <= today) {
        let amount = daily.get(&day).copied().unwrap_or(0.0);
        if range == TimeRange::Year {
            if let Some(last) = buckets.last_mut() {
                if same_month(last.start, day) {
                    last.amount += amount;
                    continue;
                }
            }
        }
        buckets.push(SeriesBucket {
            label: day.format(format).to_string(),
            start: day,
            amount,
        });
    }
    buckets
}

fn daily_totals(expenses: &[Expense], start: NaiveDate, end: NaiveDate) -> HashMap<NaiveDate, f64> {
    let mut totals = HashMap::new();
    for expense in expenses {
        if let Some(date) = expense.date().filter(|d| (start..=end).contains(d)) {
            *totals.entry(date).or_insert(0.0) += expense.amount();
        }
    }
    totals
}

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

#[cfg(test)]
mod tests {
    use super::{time_series, TimeRange};
    use crate::model::expense::Expense;
    use chrono::NaiveDate;
    use serde_json::json;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(amount: f64, date: &str) -> Expense {
        Expense::from_value(json!({ "amount": amount, "date": date }))
    }

    #[test]
    fn week_has_seven_daily_buckets_ending_today() {
        let today = day(2024, 3, 10); // Sunday
        let expenses = vec![
            expense(5.0, "2024-03-10"),
            expense(7.0, "2024-03-04"),
            expense(2.5, "2024-03-04"),
            expense(100.0, "2024-03-03"),
            expense(100.0, "2024-03-11"),
        ];

        let series = time_series(&expenses, TimeRange::Week, today);
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].start, day(2024, 3, 4));
        assert_eq!(series[0].label, "Mon");
        assert_eq!(series[0].amount, 9.5);
        assert_eq!(series[6].label, "Sun");
        assert_eq!(series[6].amount, 5.0);
        assert_eq!(series.iter().map(|b| b.amount).sum::<f64>(), 14.5);
    }

    #[test]
    fn month_has_thirty_buckets_with_day_labels() {
        let today = day(2024, 3, 1);
        let series = time_series(&[expense(3.0, "2024-02-01")], TimeRange::Month, today);

        assert_eq!(series.len(), 30);
        assert_eq!(series[0].start, day(2024, 2, 1));
        assert_eq!(series[0].label, "Feb 1");
        assert_eq!(series[0].amount, 3.0);
        assert_eq!(series[28].label, "Feb 29");
        assert_eq!(series[29].label, "Mar 1");
        assert_eq!(series[29].amount, 0.0);
    }

    #[test]
    fn year_folds_days_into_twelve_chronological_months() {
        let today = day(2024, 3, 15);
        let expenses = vec![
            expense(1.0, "2023-04-15"),
            expense(2.0, "2023-04-30"),
            expense(4.0, "2023-12-31"),
            expense(8.0, "2024-01-01"),
            expense(16.0, "2024-03-15"),
            expense(32.0, "2023-04-14"),
        ];

        let series = time_series(&expenses, TimeRange::Year, today);
        let labels: Vec<_> = series.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec", "Jan", "Feb", "Mar"]
        );
        assert_eq!(series[0].start, day(2023, 4, 15));
        assert_eq!(series[0].amount, 3.0);
        assert_eq!(series[8].amount, 4.0);
        assert_eq!(series[9].amount, 8.0);
        assert_eq!(series[10].amount, 0.0);
        assert_eq!(series[11].amount, 16.0);
    }

    #[test]
    fn year_window_clamps_month_end() {
        let today = day(2024, 12, 31);
        let series = time_series(&[], TimeRange::Year, today);
        assert_eq!(series.len(), 12);
        assert_eq!(series[0].start, day(2024, 1, 31));
        assert!(series.iter().all(|b| b.amount == 0.0));
    }

    #[test]
    fn undated_expenses_are_ignored() {
        let today = day(2024, 3, 10);
        let series = time_series(
            &[Expense::from_value(json!({ "amount": 9.0 }))],
            TimeRange::Week,
            today,
        );
        assert!(series.iter().all(|b| b.amount == 0.0));
    }

    #[test]
    fn parses_range_names_and_aliases() {
        assert_eq!("week".parse::<TimeRange>().unwrap(), TimeRange::Week);
        assert_eq!("30D".parse::<TimeRange>().unwrap(), TimeRange::Month);
        assert_eq!("12m".parse::<TimeRange>().unwrap(), TimeRange::Year);
        assert!("decade".parse::<TimeRange>().is_err());
    }
}
