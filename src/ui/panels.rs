use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::DatePickerButton;

use crate::data::query::CatalogClient;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – query controls and summary metrics
// ---------------------------------------------------------------------------

/// Render the query panel: date window, magnitude floor, fetch button, and
/// the two headline metrics of the current view.
pub fn side_panel(ui: &mut Ui, state: &mut AppState, client: &CatalogClient) {
    ui.heading("Query");
    ui.separator();

    let form = &mut state.form;

    ui.label("Start date");
    ui.add(DatePickerButton::new(&mut form.start_date).id_salt("start_date"));
    ui.add_space(4.0);

    ui.label("End date");
    ui.add(DatePickerButton::new(&mut form.end_date).id_salt("end_date"));
    ui.add_space(8.0);

    ui.checkbox(&mut form.filter_enabled, "Minimum magnitude");
    ui.add_enabled(
        form.filter_enabled,
        egui::Slider::new(&mut form.min_magnitude, 0.0..=10.0)
            .step_by(0.1)
            .fixed_decimals(1),
    );
    ui.add_space(8.0);

    if ui
        .add_enabled(!state.fetching, egui::Button::new("Fetch earthquakes"))
        .clicked()
    {
        state.run_query(client);
    }

    ui.separator();
    ui.heading("Summary");

    match &state.view {
        Some(view) => {
            let count = view.dataset.len();
            let mean = view
                .summary
                .map(|s| format!("{:.2}", s.mean_magnitude))
                .unwrap_or_else(|| "–".to_string());

            ui.columns(2, |cols: &mut [Ui]| {
                cols[0].vertical_centered(|ui: &mut Ui| {
                    ui.heading(count.to_string());
                    ui.small("earthquakes");
                });
                cols[1].vertical_centered(|ui: &mut Ui| {
                    ui.heading(mean);
                    ui.small("mean magnitude");
                });
            });
        }
        None => {
            ui.label("No data fetched yet.");
        }
    }

    ui.separator();
    ui.strong("Magnitude scale");
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for (label, color) in crate::color::scale_swatches() {
            ui.label(RichText::new(label).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            let has_view = state.view.is_some();

            if ui
                .add_enabled(has_view, egui::Button::new("Save CSV…"))
                .clicked()
            {
                save_file_dialog(state);
                ui.close_menu();
            }

            if ui
                .add_enabled(has_view, egui::Button::new("Copy download link"))
                .clicked()
            {
                if let Some(view) = &state.view {
                    ui.ctx().copy_text(view.download.href.clone());
                    log::info!("download link copied ({} chars)", view.download.href.len());
                }
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(view) = &state.view {
            ui.label(format!("{} events loaded", view.dataset.len()));
        }

        ui.separator();

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Ask where to put the CSV and write the current dataset there.
pub fn save_file_dialog(state: &mut AppState) {
    let outcome = match &state.view {
        Some(view) => {
            let file = rfd::FileDialog::new()
                .set_title("Save earthquake data")
                .set_file_name(view.download.filename.as_str())
                .add_filter("CSV", &["csv"])
                .save_file();

            file.map(|path| {
                crate::data::export::write_csv_file(&view.dataset, &path)
                    .map(|()| (view.dataset.len(), path))
            })
        }
        None => None,
    };

    match outcome {
        Some(Ok((count, path))) => {
            log::info!("saved {count} events to {}", path.display());
        }
        Some(Err(e)) => {
            log::error!("failed to save CSV: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
        None => {}
    }
}
