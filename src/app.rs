use eframe::egui;

use crate::state::{AppState, View};
use crate::ui::{calculator, explore, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct HealthDashApp {
    pub state: AppState,
}

impl eframe::App for HealthDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Data-backed views read through the mtime-keyed cache each frame.
        if self.state.view != View::Home {
            self.state.ensure_loaded();
        }

        // ---- Top panel: navigation ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: active view ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            View::Home => panels::home_view(ui),
            View::Exploration => explore::exploration_view(ui, &mut self.state),
            View::Calculator => calculator::calculator_view(ui, &mut self.state),
        });
    }
}
