use std::collections::BTreeMap;

use super::model::{Dataset, Record, YearMonth, CATEGORY, REGION};

/// Column header used for time-series keys.
pub const MONTH: &str = "Month";

// ---------------------------------------------------------------------------
// Aggregation – grouped sum of sales
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow<K> {
    pub key: K,
    pub sales: f64,
}

/// Sales summed per distinct key, one row per key present in the data.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation<K> {
    /// Header for the key column (`Category`, `Region`, `Month`).
    pub key_column: &'static str,
    pub rows: Vec<AggregateRow<K>>,
}

impl<K> Aggregation<K> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn total(&self) -> f64 {
        self.rows.iter().map(|r| r.sales).sum()
    }
}

/// Group `dataset` by `key`, summing sales in row order. Rows without a key
/// are left out; keys come back in ascending order.
fn group_by<K, F>(dataset: &Dataset, key_column: &'static str, key: F) -> Aggregation<K>
where
    K: Ord,
    F: Fn(&Record) -> Option<K>,
{
    let mut sums: BTreeMap<K, f64> = BTreeMap::new();
    for record in &dataset.records {
        if let Some(k) = key(record) {
            *sums.entry(k).or_insert(0.0) += record.sales;
        }
    }
    Aggregation {
        key_column,
        rows: sums
            .into_iter()
            .map(|(key, sales)| AggregateRow { key, sales })
            .collect(),
    }
}

/// Sales per category, alphabetical.
pub fn by_category(dataset: &Dataset) -> Aggregation<String> {
    group_by(dataset, CATEGORY, |r| r.category.clone())
}

/// Sales per region, alphabetical.
pub fn by_region(dataset: &Dataset) -> Aggregation<String> {
    group_by(dataset, REGION, |r| r.region.clone())
}

/// Sales per calendar month, chronological.
pub fn by_month(dataset: &Dataset) -> Aggregation<YearMonth> {
    group_by(dataset, MONTH, |r| r.order_date.map(YearMonth::of))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pairs<K: ToString>(agg: &Aggregation<K>) -> Vec<(String, f64)> {
        agg.rows
            .iter()
            .map(|r| (r.key.to_string(), r.sales))
            .collect()
    }

    #[test]
    fn sums_per_category_and_region() {
        let ds = Dataset::from_records(vec![
            Record::new(date(2024, 1, 15), "East", "NY", "NYC", "Furniture", 100.0),
            Record::new(date(2024, 2, 10), "West", "CA", "LA", "Tech", 200.0),
            Record::new(date(2024, 1, 20), "East", "NY", "NYC", "Tech", 50.0),
        ]);
        assert_eq!(
            pairs(&by_category(&ds)),
            [("Furniture".to_string(), 100.0), ("Tech".to_string(), 250.0)]
        );
        assert_eq!(
            pairs(&by_region(&ds)),
            [("East".to_string(), 150.0), ("West".to_string(), 200.0)]
        );
    }

    #[test]
    fn months_sort_by_calendar_not_label() {
        let ds = Dataset::from_records(vec![
            Record::new(date(2025, 1, 2), "East", "NY", "NYC", "Tech", 1.0),
            Record::new(date(2024, 2, 2), "East", "NY", "NYC", "Tech", 2.0),
            Record::new(date(2023, 12, 31), "East", "NY", "NYC", "Tech", 3.0),
            Record::new(date(2024, 1, 5), "East", "NY", "NYC", "Tech", 4.0),
            Record::new(date(2024, 1, 28), "East", "NY", "NYC", "Tech", 5.0),
        ]);
        let agg = by_month(&ds);
        assert_eq!(agg.key_column, MONTH);
        assert_eq!(
            pairs(&agg),
            [
                ("2023-Dec".to_string(), 3.0),
                ("2024-Jan".to_string(), 9.0),
                ("2024-Feb".to_string(), 2.0),
                ("2025-Jan".to_string(), 1.0),
            ]
        );
    }

    #[test]
    fn empty_dataset_gives_empty_views() {
        let ds = Dataset::default();
        assert!(by_category(&ds).is_empty());
        assert!(by_region(&ds).is_empty());
        assert!(by_month(&ds).is_empty());
    }

    #[test]
    fn null_keys_are_not_grouped() {
        let mut blank = Record::new(date(2024, 1, 1), "East", "NY", "NYC", "Tech", 7.0);
        blank.category = None;
        let ds = Dataset::from_records(vec![
            blank,
            Record::new(date(2024, 1, 1), "East", "NY", "NYC", "Tech", 3.0),
        ]);
        assert_eq!(pairs(&by_category(&ds)), [("Tech".to_string(), 3.0)]);
        assert_eq!(by_region(&ds).total(), 10.0);
    }

    #[test]
    fn no_zero_filled_months() {
        let ds = Dataset::from_records(vec![
            Record::new(date(2024, 1, 1), "East", "NY", "NYC", "Tech", 1.0),
            Record::new(date(2024, 6, 1), "East", "NY", "NYC", "Tech", 1.0),
        ]);
        assert_eq!(by_month(&ds).len(), 2);
    }
}
