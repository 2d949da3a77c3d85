use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::REQUIRED_COLUMNS;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Record table (bottom panel)
// ---------------------------------------------------------------------------

/// Render the fetched records as a scrollable table, one row per event.
/// Only the five required columns are shown; the full table travels in the
/// download payload.
pub fn record_table(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.view {
        Some(view) => &view.dataset,
        None => {
            ui.label("No data fetched yet.");
            return;
        }
    };

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::remainder().at_least(160.0))
        .columns(Column::auto().at_least(80.0), REQUIRED_COLUMNS.len() - 1)
        .header(20.0, |mut header| {
            for name in REQUIRED_COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, dataset.len(), |mut row| {
                let record = &dataset.records()[row.index()];
                for name in REQUIRED_COLUMNS {
                    row.col(|ui: &mut Ui| {
                        ui.label(record.column_value(name).unwrap_or_default());
                    });
                }
            });
        });
}
