use std::fmt::Display;

use super::aggregate::Aggregation;
use super::model::{Dataset, SALES};

/// Suggested download names for each view.
pub const CATEGORY_FILE: &str = "Category.csv";
pub const REGION_FILE: &str = "Region.csv";
pub const TIME_SERIES_FILE: &str = "TimeSeries.csv";
pub const FILTERED_FILE: &str = "Filtered.csv";

/// UTF-8 CSV of an aggregation: a `<key>,Sales` header, then one line per key.
pub fn aggregation_csv<K: Display>(agg: &Aggregation<K>) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([agg.key_column, SALES])?;
    for row in &agg.rows {
        writer.write_record([row.key.to_string(), row.sales.to_string()])?;
    }
    finish(writer)
}

/// UTF-8 CSV of the rows themselves, all original columns in source order.
///
/// Required columns are written as loaded, not as they appeared in the file:
/// `Order Date` as `%Y-%m-%d` (blank when it did not parse) and `Sales` as the
/// number that was summed, so a non-numeric cell such as `n/a` comes out as `0`.
/// Extra columns keep their original text.
pub fn records_csv(dataset: &Dataset) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&dataset.columns)?;
    for record in &dataset.records {
        writer.write_record(
            dataset
                .columns
                .iter()
                .map(|col| record.field(col).unwrap_or_default()),
        )?;
    }
    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>, csv::Error> {
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}
