use eframe::egui::{self, Color32, ProgressBar, RichText, Ui};

use crate::bmi::BmiClass;
use crate::data::model::Column;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// BMI calculator view
// ---------------------------------------------------------------------------

/// Render the calculator form and, after submission, the result.
pub fn calculator_view(ui: &mut Ui, state: &mut AppState) {
    ui.heading("BMI Calculator");
    ui.add_space(8.0);

    // Reference average from the full dataset, ready before any submission.
    let avg_bmi = state
        .dataset
        .as_ref()
        .map(|ds| ds.column_mean(Column::Bmi));

    ui.horizontal(|ui| {
        ui.label("Height (cm)");
        ui.add(
            egui::DragValue::new(&mut state.calc.height_cm)
                .range(0.0..=f64::MAX)
                .speed(0.1),
        );
    });
    ui.horizontal(|ui| {
        ui.label("Weight (kg)");
        ui.add(
            egui::DragValue::new(&mut state.calc.weight_kg)
                .range(0.0..=f64::MAX)
                .speed(0.1),
        );
    });

    if ui.button("Calculate BMI").clicked() {
        state.submit_bmi();
    }

    let Some(outcome) = state.calc.outcome else {
        return;
    };

    ui.add_space(10.0);
    match outcome {
        Ok(result) => {
            ui.label(RichText::new(format!("Your BMI: {:.2}", result.bmi)).heading());

            let (color, label) = match result.class {
                BmiClass::Underweight => (Color32::YELLOW, "Underweight"),
                BmiClass::NormalWeight => (Color32::LIGHT_GREEN, "Normal weight"),
                BmiClass::Overweight => (Color32::YELLOW, "Overweight"),
                BmiClass::Obesity => (Color32::LIGHT_RED, "Obesity"),
            };
            ui.label(RichText::new(label).color(color).strong());

            ui.add(ProgressBar::new(result.progress() as f32).desired_width(260.0));

            if let Some(avg) = avg_bmi {
                ui.add_space(6.0);
                ui.label(format!("Average BMI in dataset: {avg:.1}"));
            }
        }
        Err(e) => {
            ui.colored_label(Color32::LIGHT_RED, e.to_string());
        }
    }
}
