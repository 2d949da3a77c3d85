use eframe::egui;

use crate::data::query::CatalogClient;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct QuakeScopeApp {
    client: CatalogClient,
    pub state: AppState,
}

impl Default for QuakeScopeApp {
    fn default() -> Self {
        Self {
            client: CatalogClient::new(),
            state: AppState::default(),
        }
    }
}

impl eframe::App for QuakeScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: query form and summary ----
        egui::SidePanel::left("query_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, &self.client);
            });

        // ---- Bottom panel: record table ----
        egui::TopBottomPanel::bottom("record_table")
            .default_height(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                table::record_table(ui, &self.state);
            });

        // ---- Central panel: epicenter map ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::map_plot(ui, &self.state);
        });
    }
}
