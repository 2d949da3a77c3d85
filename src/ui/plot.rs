use eframe::egui::Ui;
use egui_plot::{Plot, PlotPoints, Points};

use crate::color::magnitude_color;
use crate::data::model::decimal_string;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Epicenter map (central panel)
// ---------------------------------------------------------------------------

/// Render the epicenter scatter in the central panel.
///
/// Each record becomes one marker at (longitude, latitude), colored and
/// sized by magnitude. Hovering a marker shows the place description.
pub fn map_plot(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.view {
        Some(view) => &view.dataset,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Fetch earthquakes to view the map");
            });
            return;
        }
    };

    Plot::new("epicenter_map")
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .data_aspect(1.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(|name, point| {
            if name.is_empty() {
                format!("lon {:.2}\nlat {:.2}", point.x, point.y)
            } else {
                format!("{name}\nlon {:.2}  lat {:.2}", point.x, point.y)
            }
        })
        .show(ui, |plot_ui| {
            for record in dataset.records() {
                let series: PlotPoints = vec![[record.longitude, record.latitude]].into();

                // Larger quakes get disproportionately larger markers.
                let radius = (record.mag * record.mag * 0.35).clamp(1.5, 12.0) as f32;

                let marker = Points::new(series)
                    .name(format!("M {}  {}", decimal_string(record.mag), record.place))
                    .color(magnitude_color(record.mag))
                    .filled(true)
                    .radius(radius);

                plot_ui.points(marker);
            }
        });
}
