use std::fmt::Display;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use superstore_dashboard::data::aggregate::Aggregation;
use superstore_dashboard::data::export::{
    CATEGORY_FILE, FILTERED_FILE, REGION_FILE, TIME_SERIES_FILE,
};
use superstore_dashboard::data::model::SALES;
use superstore_dashboard::state::AppState;

use super::{charts, export, format_currency};
use crate::color::ChartColors;

// ---------------------------------------------------------------------------
// Central panel – charts, data grids, downloads
// ---------------------------------------------------------------------------

/// Render the dashboard body. Returns a notice when an export finished.
pub fn dashboard(ui: &mut Ui, state: &AppState, colors: &ChartColors) -> Option<String> {
    ui.heading(&state.config.title);

    if let Some(msg) = &state.status_message {
        ui.label(RichText::new(msg).color(Color32::RED));
        return None;
    }

    let Some(view) = &state.view else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to explore sales  (File → Open…)");
        });
        return None;
    };

    let mut notice = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.columns(2, |cols| {
                cols[0].heading("Category wise Sales");
                charts::category_bars(&mut cols[0], &view.by_category, &colors.category);
                cols[1].heading("Region wise Sales");
                charts::region_donut(&mut cols[1], &view.by_region, &colors.region);
            });

            ui.columns(2, |cols| {
                notice = notice.take().or(view_data(
                    &mut cols[0],
                    "Category_ViewData",
                    &view.by_category,
                    CATEGORY_FILE,
                ));
                notice = notice.take().or(view_data(
                    &mut cols[1],
                    "Region_ViewData",
                    &view.by_region,
                    REGION_FILE,
                ));
            });

            ui.separator();
            ui.heading("Time Series Analysis");
            charts::time_series(ui, &view.by_month);
            notice = notice.take().or(view_data(
                ui,
                "View Data of TimeSeries:",
                &view.by_month,
                TIME_SERIES_FILE,
            ));

            ui.separator();
            ui.collapsing("Filtered rows", |ui: &mut Ui| {
                ui.label(format!(
                    "{} rows, {} total sales",
                    view.filtered.len(),
                    format_currency(view.filtered.total_sales())
                ));
                if ui.button("Download Data").clicked() {
                    notice = export::describe(export::download_records(&view.filtered, FILTERED_FILE));
                }
            });
        });

    notice
}

/// Collapsible grid of one aggregation plus its download button.
fn view_data<K: Display>(
    ui: &mut Ui,
    title: &str,
    agg: &Aggregation<K>,
    file_name: &str,
) -> Option<String> {
    let mut notice = None;
    ui.collapsing(title, |ui: &mut Ui| {
        egui::Grid::new((title, "grid"))
            .striped(true)
            .num_columns(2)
            .show(ui, |ui: &mut Ui| {
                ui.strong(agg.key_column);
                ui.strong(SALES);
                ui.end_row();
                for row in &agg.rows {
                    ui.label(row.key.to_string());
                    ui.label(format_currency(row.sales));
                    ui.end_row();
                }
            });

        if ui
            .button("Download Data")
            .on_hover_text("Click here to download the data as a CSV file")
            .clicked()
        {
            notice = export::describe(export::download_aggregation(agg, file_name));
        }
    });
    notice
}
