use anyhow::Context;
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;

use superstore_dashboard::data::filter::Dimension;
use superstore_dashboard::data::loader::DataSource;
use superstore_dashboard::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – date range and cascading filters
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Choose your filter:");
    ui.separator();

    let Some(session) = &state.session else {
        ui.label("No dataset loaded.");
        return;
    };

    // Copy what we need so we can mutate state after the widgets.
    let mut start = session.start;
    let mut end = session.end;
    let filters = session.filters.clone();
    let choices: Vec<(Dimension, Vec<String>)> = Dimension::ALL
        .iter()
        .map(|dim| {
            let values = state
                .view
                .as_ref()
                .map(|v| v.choices(*dim).to_vec())
                .unwrap_or_default();
            (*dim, values)
        })
        .collect();

    // ---- Date range ----
    let mut start_changed = false;
    let mut end_changed = false;
    egui::Grid::new("date_range")
        .num_columns(2)
        .show(ui, |ui: &mut Ui| {
            ui.label("Start date");
            start_changed = ui
                .add(DatePickerButton::new(&mut start).id_salt("start_date"))
                .changed();
            ui.end_row();

            ui.label("End date");
            end_changed = ui
                .add(DatePickerButton::new(&mut end).id_salt("end_date"))
                .changed();
            ui.end_row();
        });
    ui.separator();

    // ---- Region → State → City ----
    let mut toggles: Vec<(Dimension, String)> = Vec::new();
    let mut clears: Vec<Dimension> = Vec::new();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (dim, options) in &choices {
                let selected = filters.selection(*dim);
                // Picked earlier but gone from the current choices; still
                // listed so they can be unticked.
                let stale: Vec<&str> = selected
                    .iter()
                    .filter(|v| !options.iter().any(|o| o == v))
                    .collect();

                let header = format!("{}  ({}/{})", prompt(*dim), selected.len(), options.len());
                egui::CollapsingHeader::new(RichText::new(header).strong())
                    .id_salt(dim.column())
                    .default_open(*dim == Dimension::Region)
                    .show(ui, |ui: &mut Ui| {
                        if ui.small_button("Clear").clicked() {
                            clears.push(*dim);
                        }

                        for value in options.iter().map(String::as_str) {
                            let mut checked = selected.contains(value);
                            if ui.checkbox(&mut checked, value).changed() {
                                toggles.push((*dim, value.to_string()));
                            }
                        }

                        for value in &stale {
                            let mut checked = true;
                            let text = RichText::new(*value).italics().weak();
                            if ui
                                .checkbox(&mut checked, text)
                                .on_hover_text("Not present in the current data")
                                .changed()
                            {
                                toggles.push((*dim, value.to_string()));
                            }
                        }
                    });
            }
        });

    if start_changed {
        state.set_start(start);
    }
    if end_changed {
        state.set_end(end);
    }
    for dim in clears {
        state.clear_selection(dim);
    }
    for (dim, value) in toggles {
        state.toggle_selection(dim, &value);
    }
}

fn prompt(dim: Dimension) -> &'static str {
    match dim {
        Dimension::Region => "Pick your Region",
        Dimension::State => "Pick the State",
        Dimension::City => "Pick the City",
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Use bundled dataset").clicked() {
                state.load_fallback();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(msg) = &state.source_message {
            ui.label(RichText::new(msg).color(Color32::from_rgb(70, 150, 90)));
        }

        if let Some(view) = &state.view {
            ui.separator();
            ui.label(format!(
                "{} rows in range, {} after filters",
                view.in_range.len(),
                view.filtered.len()
            ));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Pick a file and load it as an upload.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Upload a file")
        .add_filter("Supported files", &["csv", "txt", "xlsx", "xls"])
        .add_filter("CSV / text", &["csv", "txt"])
        .add_filter("Excel", &["xlsx", "xls"])
        .pick_file();

    let Some(path) = file else {
        return;
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    match std::fs::read(&path).with_context(|| format!("reading {}", path.display())) {
        Ok(bytes) => state.load_source(DataSource::Upload { name, bytes }),
        Err(e) => {
            log::error!("Failed to read upload: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
