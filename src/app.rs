use std::sync::Arc;

use eframe::egui::{self, RichText};

use superstore_dashboard::config::DashboardConfig;
use superstore_dashboard::data::model::Dataset;
use superstore_dashboard::state::AppState;

use crate::color::{ChartColors, ColorMap};
use crate::ui::{dashboard, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
    colors: ChartColors,
    /// Dataset the colours were built for.
    colors_for: Option<Arc<Dataset>>,
    /// Result of the last export, shown until the next one.
    notice: Option<String>,
}

impl DashboardApp {
    /// Start on the bundled dataset; an upload replaces it later.
    pub fn new(config: DashboardConfig) -> Self {
        let mut state = AppState::new(config);
        state.load_fallback();
        Self {
            state,
            colors: ChartColors::default(),
            colors_for: None,
            notice: None,
        }
    }

    /// Colours follow the whole dataset, not the filtered view, so a region
    /// keeps its colour while filters change.
    fn refresh_colors(&mut self) {
        let Some(session) = &self.state.session else {
            return;
        };
        if self
            .colors_for
            .as_ref()
            .is_some_and(|ds| Arc::ptr_eq(ds, &session.dataset))
        {
            return;
        }
        let ds = &session.dataset;
        self.colors = ChartColors {
            category: ColorMap::new(ds.records.iter().filter_map(|r| r.category.as_deref())),
            region: ColorMap::new(ds.records.iter().filter_map(|r| r.region.as_deref())),
        };
        self.colors_for = Some(Arc::clone(ds));
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.refresh_colors();

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(notice) = &self.notice {
                ui.label(RichText::new(notice).italics());
            }
            if let Some(notice) = dashboard::dashboard(ui, &self.state, &self.colors) {
                self.notice = Some(notice);
            }
        });
    }
}
