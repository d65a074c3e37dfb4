#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use superstore_dashboard::data::filter::Selection;
use superstore_dashboard::data::model::{Dataset, Record};

pub const REGIONS: [&str; 3] = ["Central", "East", "West"];
pub const STATES: [&str; 4] = ["CA", "NY", "TX", "WA"];
pub const CITIES: [&str; 5] = ["Austin", "LA", "NYC", "Seattle", "Buffalo"];
pub const CATEGORIES: [&str; 3] = ["Furniture", "Office Supplies", "Technology"];

pub fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|d| d.checked_add_days(Days::new(offset)))
        .expect("offset within range")
}

fn maybe(values: &'static [&'static str], present: f64) -> impl Strategy<Value = Option<String>> {
    prop::option::weighted(present, prop::sample::select(values).prop_map(str::to_string))
}

/// Rows with occasional nulls in every nullable field. Sales are whole
/// numbers so sums are exact regardless of order.
pub fn record() -> impl Strategy<Value = Record> {
    (
        prop::option::weighted(0.95, 0u64..730),
        maybe(&REGIONS, 0.9),
        maybe(&STATES, 0.9),
        maybe(&CITIES, 0.9),
        maybe(&CATEGORIES, 0.9),
        0u32..10_000,
    )
        .prop_map(|(offset, region, state, city, category, sales)| Record {
            order_date: offset.map(day),
            region,
            state,
            city,
            category,
            sales: f64::from(sales),
            extra: BTreeMap::new(),
        })
}

/// Rows with every field present.
pub fn complete_record() -> impl Strategy<Value = Record> {
    (
        0u64..730,
        prop::sample::select(REGIONS.to_vec()),
        prop::sample::select(STATES.to_vec()),
        prop::sample::select(CITIES.to_vec()),
        prop::sample::select(CATEGORIES.to_vec()),
        0u32..10_000,
    )
        .prop_map(|(offset, region, state, city, category, sales)| {
            Record::new(day(offset), region, state, city, category, f64::from(sales))
        })
}

pub fn dataset_of<S>(row: S) -> impl Strategy<Value = Dataset>
where
    S: Strategy<Value = Record>,
{
    prop::collection::vec(row, 0..60).prop_map(Dataset::from_records)
}

/// A selection over `values` plus one value that never occurs in the data.
pub fn selection(values: &'static [&'static str]) -> impl Strategy<Value = Selection> {
    let mut pool: Vec<&'static str> = values.to_vec();
    pool.push("Nowhere");
    let max = pool.len();
    prop::sample::subsequence(pool, 0..=max).prop_map(|picked| picked.into_iter().collect())
}
