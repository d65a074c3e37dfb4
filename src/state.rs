use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::DashboardConfig;
use crate::data::cache::LoadCache;
use crate::data::filter::Dimension;
use crate::data::loader::DataSource;
use crate::data::model::Dataset;
use crate::data::session::{DashboardView, Session};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Memoized loads, keyed by source identity.
    cache: LoadCache,

    /// Loaded dataset plus date range and selections (None until a load succeeds).
    pub session: Option<Session>,

    /// Output of the last recomputation (None while an error is shown).
    pub view: Option<DashboardView>,

    /// One-line description of where the data came from.
    pub source_message: Option<String>,

    /// Error shown in the UI; rendering of the views stops while it is set.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            cache: LoadCache::new(),
            session: None,
            view: None,
            source_message: None,
            status_message: None,
        }
    }

    /// Load the bundled dataset named in the config.
    pub fn load_fallback(&mut self) {
        let source = DataSource::Fallback(self.config.fallback_path.clone());
        self.load_source(source);
    }

    /// Load `source` (through the cache) and start a fresh session on it.
    pub fn load_source(&mut self, source: DataSource) {
        match self.cache.get_or_load(&source) {
            Ok(dataset) => self.set_dataset(dataset, &source),
            Err(e) => {
                log::error!("Failed to load {}: {e}", source.label());
                self.session = None;
                self.view = None;
                self.source_message = None;
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Ingest a newly loaded dataset: full date span, no selections.
    pub fn set_dataset(&mut self, dataset: Arc<Dataset>, source: &DataSource) {
        let label = source.label();
        self.source_message = Some(match source {
            DataSource::Upload { .. } => format!("Loaded file: {label} ({} rows)", dataset.len()),
            DataSource::Fallback(_) => {
                format!("Using bundled dataset: {label} ({} rows)", dataset.len())
            }
        });
        self.session = Some(Session::new(dataset, label));
        self.recompute();
    }

    /// Rebuild the view after any change to the session.
    pub fn recompute(&mut self) {
        let Some(session) = &self.session else {
            self.view = None;
            return;
        };
        match session.view() {
            Ok(view) => {
                self.view = Some(view);
                self.status_message = None;
            }
            Err(e) => {
                log::warn!("{e}");
                self.view = None;
                self.status_message = Some(format!("{e}. Adjust the date range."));
            }
        }
    }

    pub fn set_start(&mut self, date: NaiveDate) {
        if let Some(session) = &mut self.session {
            session.start = date;
            self.recompute();
        }
    }

    pub fn set_end(&mut self, date: NaiveDate) {
        if let Some(session) = &mut self.session {
            session.end = date;
            self.recompute();
        }
    }

    /// Toggle a single value in one dimension's selection.
    pub fn toggle_selection(&mut self, dim: Dimension, value: &str) {
        if let Some(session) = &mut self.session {
            session.filters.selection_mut(dim).toggle(value);
            self.recompute();
        }
    }

    /// Drop every selected value in one dimension.
    pub fn clear_selection(&mut self, dim: Dimension) {
        if let Some(session) = &mut self.session {
            session.filters.selection_mut(dim).clear();
            self.recompute();
        }
    }
}
