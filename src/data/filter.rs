use std::collections::BTreeSet;
use std::fmt;

use super::model::{Dataset, Record, CITY, REGION, STATE};

// ---------------------------------------------------------------------------
// Dimensions of the cascade: Region → State → City
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Region,
    State,
    City,
}

impl Dimension {
    /// Cascade order.
    pub const ALL: [Dimension; 3] = [Dimension::Region, Dimension::State, Dimension::City];

    pub fn column(self) -> &'static str {
        match self {
            Dimension::Region => REGION,
            Dimension::State => STATE,
            Dimension::City => CITY,
        }
    }

    /// The record's value for this dimension, if present.
    pub fn value_of(self, record: &Record) -> Option<&str> {
        match self {
            Dimension::Region => record.region.as_deref(),
            Dimension::State => record.state.as_deref(),
            Dimension::City => record.city.as_deref(),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// Selection – chosen values for one dimension
// ---------------------------------------------------------------------------

/// Values picked for one dimension. Empty means "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(BTreeSet<String>);

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        self.0.insert(value.into())
    }

    pub fn remove(&mut self, value: &str) -> bool {
        self.0.remove(value)
    }

    /// Flip membership of `value`.
    pub fn toggle(&mut self, value: &str) {
        if !self.0.remove(value) {
            self.0.insert(value.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Membership test for one cell. Exact, case-sensitive; a null cell
    /// only passes an empty selection.
    pub fn admits(&self, value: Option<&str>) -> bool {
        self.0.is_empty() || value.is_some_and(|v| self.0.contains(v))
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Selection(iter.into_iter().map(Into::into).collect())
    }
}

// ---------------------------------------------------------------------------
// FilterState – the three selections together
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub region: Selection,
    pub state: Selection,
    pub city: Selection,
}

impl FilterState {
    pub fn new(region: Selection, state: Selection, city: Selection) -> Self {
        FilterState {
            region,
            state,
            city,
        }
    }

    pub fn selection(&self, dim: Dimension) -> &Selection {
        match dim {
            Dimension::Region => &self.region,
            Dimension::State => &self.state,
            Dimension::City => &self.city,
        }
    }

    pub fn selection_mut(&mut self, dim: Dimension) -> &mut Selection {
        match dim {
            Dimension::Region => &mut self.region,
            Dimension::State => &mut self.state,
            Dimension::City => &mut self.city,
        }
    }

    /// True when no dimension is restricted.
    pub fn is_unrestricted(&self) -> bool {
        Dimension::ALL.iter().all(|d| self.selection(*d).is_empty())
    }

    /// The whole filter as one conjunction over the dimensions.
    pub fn matches(&self, record: &Record) -> bool {
        Dimension::ALL
            .iter()
            .all(|d| self.selection(*d).admits(d.value_of(record)))
    }

    /// Rows passing every non-empty selection, in their original order.
    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        dataset.filter(|r| self.matches(r))
    }

    /// Values offered for `dim`: distinct non-null values among the rows
    /// admitted by the dimensions *before* it in the cascade. A dimension's
    /// own selection and those after it never narrow its choices.
    pub fn candidates(&self, dataset: &Dataset, dim: Dimension) -> Vec<String> {
        let upstream: Vec<Dimension> = Dimension::ALL
            .iter()
            .copied()
            .take_while(|d| *d != dim)
            .collect();
        let mut values: BTreeSet<&str> = BTreeSet::new();
        for record in &dataset.records {
            if upstream
                .iter()
                .all(|d| self.selection(*d).admits(d.value_of(record)))
            {
                if let Some(v) = dim.value_of(record) {
                    values.insert(v);
                }
            }
        }
        values.into_iter().map(str::to_string).collect()
    }
}
