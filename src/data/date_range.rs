use chrono::NaiveDate;

use super::error::{DashboardError, Result};
use super::model::Dataset;

/// Inclusive `[start, end]` window over order dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Fails with `InvalidRange` when `start > end`; the bounds are never swapped.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(DashboardError::InvalidRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    /// Earliest to latest order date present, ignoring undated rows.
    pub fn spanning(dataset: &Dataset) -> Option<Self> {
        dataset
            .date_bounds()
            .map(|(start, end)| DateRange { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Rows dated inside the window. Undated rows are dropped.
    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        dataset.filter(|r| r.order_date.is_some_and(|d| self.contains(d)))
    }
}

/// Validate `[start, end]` and restrict `dataset` to it.
pub fn restrict(dataset: &Dataset, start: NaiveDate, end: NaiveDate) -> Result<Dataset> {
    let range = DateRange::new(start, end)?;
    let out = range.apply(dataset);
    log::debug!(
        "Date range {start}..={end} kept {} of {} rows",
        out.len(),
        dataset.len()
    );
    Ok(out)
}
