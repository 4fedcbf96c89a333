use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, View};

// ---------------------------------------------------------------------------
// Top bar – navigation and status
// ---------------------------------------------------------------------------

/// Render the top navigation / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui| {
        ui.strong("Health & Lifestyle");
        ui.separator();

        for view in View::ALL {
            if ui
                .selectable_label(state.view == view, view.title())
                .clicked()
            {
                state.view = view;
            }
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!("{} records loaded", ds.len()));
        }

        if let Some(msg) = &state.load_error {
            ui.label(RichText::new(msg).color(Color32::LIGHT_RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Home view – landing page
// ---------------------------------------------------------------------------

/// Landing page text, standing in for the original hero banner.
pub fn home_view(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.heading(RichText::new("Health & Lifestyle Dashboard").size(32.0));
        ui.add_space(12.0);
        ui.label(
            "Explore a health and lifestyle dataset: descriptive statistics, \
             risk breakdowns and correlation analysis, plus a BMI calculator \
             with a dataset-wide reference average.",
        );
        ui.add_space(12.0);
        ui.label(RichText::new("Pick a page from the bar above to get started.").weak());
    });
}
