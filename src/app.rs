use std::sync::Arc;

use eframe::egui;

use crate::config::DashboardConfig;
use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BabyNamesApp {
    pub state: AppState,
}

impl BabyNamesApp {
    pub fn new(dataset: Arc<Dataset>, config: DashboardConfig) -> Self {
        Self {
            state: AppState::new(dataset, config),
        }
    }
}

impl eframe::App for BabyNamesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: brand and links ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: both charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::overview(ui);

                    panels::single_name_section(ui, &mut self.state);
                    plot::single_name_plot(ui, &self.state);

                    ui.add_space(16.0);

                    panels::comparison_section(ui, &mut self.state);
                    plot::comparison_plot(ui, &self.state);
                });
        });
    }
}
