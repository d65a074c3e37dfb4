use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{Datelike, NaiveDate};

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

pub const ORDER_DATE: &str = "Order Date";
pub const REGION: &str = "Region";
pub const STATE: &str = "State";
pub const CITY: &str = "City";
pub const CATEGORY: &str = "Category";
pub const SALES: &str = "Sales";

/// Columns every dataset must carry before anything else runs.
pub const REQUIRED_COLUMNS: [&str; 6] = [ORDER_DATE, REGION, STATE, CITY, CATEGORY, SALES];

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

/// A single order line.
///
/// Categorical fields are `None` when the source cell was empty. Columns
/// outside [`REQUIRED_COLUMNS`] are carried in `extra` untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub order_date: Option<NaiveDate>,
    pub region: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub category: Option<String>,
    pub sales: f64,
    pub extra: BTreeMap<String, String>,
}

impl Record {
    /// Build a fully-populated record with no extra columns.
    pub fn new(
        order_date: NaiveDate,
        region: &str,
        state: &str,
        city: &str,
        category: &str,
        sales: f64,
    ) -> Self {
        Record {
            order_date: Some(order_date),
            region: Some(region.to_string()),
            state: Some(state.to_string()),
            city: Some(city.to_string()),
            category: Some(category.to_string()),
            sales,
            extra: BTreeMap::new(),
        }
    }

    /// Text rendering of one column, as written back out on export. Required
    /// columns render their coerced value.
    pub fn field(&self, column: &str) -> Option<String> {
        match column {
            ORDER_DATE => self.order_date.map(|d| d.format("%Y-%m-%d").to_string()),
            REGION => self.region.clone(),
            STATE => self.state.clone(),
            CITY => self.city.clone(),
            CATEGORY => self.category.clone(),
            SALES => Some(self.sales.to_string()),
            other => self.extra.get(other).cloned(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – ordered rows plus the header they came from
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Header in source order (required and extra columns alike).
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    /// A dataset with the required columns only.
    pub fn from_records(records: Vec<Record>) -> Self {
        Dataset {
            columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Order-preserving subsequence of the rows matching `keep`.
    pub fn filter<F>(&self, mut keep: F) -> Dataset
    where
        F: FnMut(&Record) -> bool,
    {
        Dataset {
            columns: self.columns.clone(),
            records: self.records.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }

    /// Sorted distinct non-null values produced by `key`.
    pub fn distinct<F>(&self, key: F) -> Vec<String>
    where
        F: Fn(&Record) -> Option<&str>,
    {
        self.records
            .iter()
            .filter_map(|r| key(r))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Earliest and latest non-null order date.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.records.iter().filter_map(|r| r.order_date);
        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }

    pub fn total_sales(&self) -> f64 {
        self.records.iter().map(|r| r.sales).sum()
    }
}

// ---------------------------------------------------------------------------
// YearMonth – time-series key
// ---------------------------------------------------------------------------

/// Calendar month. Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    /// `2024-Jan` style label.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(d) => write!(f, "{}", d.format("%Y-%b")),
            None => write!(f, "{}-{:02}", self.year, self.month),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn year_month_orders_chronologically_not_by_label() {
        let mut months = vec![
            YearMonth::of(date(2025, 1, 3)),
            YearMonth::of(date(2024, 2, 9)),
            YearMonth::of(date(2024, 1, 30)),
        ];
        months.sort();
        let labels: Vec<String> = months.iter().map(|m| m.to_string()).collect();
        assert_eq!(labels, ["2024-Jan", "2024-Feb", "2025-Jan"]);
    }

    #[test]
    fn distinct_skips_nulls_and_sorts() {
        let mut blank = Record::new(date(2024, 1, 1), "East", "NY", "NYC", "Tech", 1.0);
        blank.region = None;
        let ds = Dataset::from_records(vec![
            Record::new(date(2024, 1, 1), "West", "CA", "LA", "Tech", 1.0),
            blank,
            Record::new(date(2024, 1, 1), "East", "NY", "NYC", "Tech", 1.0),
            Record::new(date(2024, 1, 1), "West", "WA", "Seattle", "Tech", 1.0),
        ]);
        assert_eq!(ds.distinct(|r| r.region.as_deref()), ["East", "West"]);
    }

    #[test]
    fn date_bounds_ignores_missing_dates() {
        let mut undated = Record::new(date(2000, 1, 1), "East", "NY", "NYC", "Tech", 1.0);
        undated.order_date = None;
        let ds = Dataset::from_records(vec![
            Record::new(date(2024, 3, 1), "East", "NY", "NYC", "Tech", 1.0),
            undated,
            Record::new(date(2023, 7, 4), "East", "NY", "NYC", "Tech", 1.0),
        ]);
        assert_eq!(ds.date_bounds(), Some((date(2023, 7, 4), date(2024, 3, 1))));
        assert_eq!(Dataset::default().date_bounds(), None);
    }
}
