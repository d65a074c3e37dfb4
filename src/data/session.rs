use std::sync::Arc;

use chrono::NaiveDate;

use super::aggregate::{by_category, by_month, by_region, Aggregation};
use super::date_range::DateRange;
use super::error::Result;
use super::filter::{Dimension, FilterState};
use super::model::{Dataset, YearMonth};

// ---------------------------------------------------------------------------
// Session – everything one user is looking at
// ---------------------------------------------------------------------------

/// Per-session context handed to every stage. Nothing here is global.
#[derive(Debug, Clone)]
pub struct Session {
    pub dataset: Arc<Dataset>,
    /// Name of the file the dataset came from.
    pub source_label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub filters: FilterState,
}

impl Session {
    /// Start with the full date span of `dataset` and no selections.
    pub fn new(dataset: Arc<Dataset>, source_label: impl Into<String>) -> Self {
        let (start, end) = DateRange::spanning(&dataset)
            .map(|r| (r.start(), r.end()))
            .unwrap_or_default();
        Session {
            dataset,
            source_label: source_label.into(),
            start,
            end,
            filters: FilterState::default(),
        }
    }

    /// Run date range → filter → aggregation once for the current state.
    pub fn view(&self) -> Result<DashboardView> {
        DashboardView::compute(&self.dataset, self.start, self.end, &self.filters)
    }
}

// ---------------------------------------------------------------------------
// DashboardView – derived output of one recomputation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Rows inside the date range, before Region/State/City.
    pub in_range: Dataset,
    /// Rows after every filter; what the aggregations are built from.
    pub filtered: Dataset,
    pub region_choices: Vec<String>,
    pub state_choices: Vec<String>,
    pub city_choices: Vec<String>,
    pub by_category: Aggregation<String>,
    pub by_region: Aggregation<String>,
    pub by_month: Aggregation<YearMonth>,
}

impl DashboardView {
    pub fn compute(
        dataset: &Dataset,
        start: NaiveDate,
        end: NaiveDate,
        filters: &FilterState,
    ) -> Result<Self> {
        let in_range = DateRange::new(start, end)?.apply(dataset);
        let filtered = filters.apply(&in_range);
        log::debug!(
            "Recomputed view: {} rows in range, {} after filters",
            in_range.len(),
            filtered.len()
        );

        Ok(DashboardView {
            region_choices: filters.candidates(&in_range, Dimension::Region),
            state_choices: filters.candidates(&in_range, Dimension::State),
            city_choices: filters.candidates(&in_range, Dimension::City),
            by_category: by_category(&filtered),
            by_region: by_region(&filtered),
            by_month: by_month(&filtered),
            in_range,
            filtered,
        })
    }

    pub fn choices(&self, dim: Dimension) -> &[String] {
        match dim {
            Dimension::Region => &self.region_choices,
            Dimension::State => &self.state_choices,
            Dimension::City => &self.city_choices,
        }
    }
}
