use eframe::egui::{self, Align2, Color32, FontId, Sense, Ui, Vec2};
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Plot, PlotPoints, Points};
use palette::{LinSrgb, Mix, Srgb};

use crate::data::stats::quantile_sorted;

const CHART_HEIGHT: f32 = 260.0;
const ACCENT: Color32 = Color32::from_rgb(100, 160, 220);

// ---------------------------------------------------------------------------
// Boxplot
// ---------------------------------------------------------------------------

/// Single-series vertical boxplot: quartile box, median line, whiskers at
/// min/max.
pub fn boxplot(ui: &mut Ui, id: &str, y_label: &str, values: &[f64]) {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(|a, b| a.total_cmp(b));
    if sorted.is_empty() {
        ui.label("No data in the current selection.");
        return;
    }

    let spread = BoxSpread::new(
        sorted[0],
        quantile_sorted(&sorted, 0.25),
        quantile_sorted(&sorted, 0.5),
        quantile_sorted(&sorted, 0.75),
        sorted[sorted.len() - 1],
    );
    let elem = BoxElem::new(0.0, spread).box_width(0.5).fill(ACCENT);

    Plot::new(id)
        .height(CHART_HEIGHT)
        .y_axis_label(y_label)
        .show_x(false)
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(vec![elem]).name(y_label));
        });
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// Equal-width histogram with Sturges' bin count.
pub fn histogram(ui: &mut Ui, id: &str, x_label: &str, values: &[f64]) {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        ui.label("No data in the current selection.");
        return;
    }

    let min = finite.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = finite.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let n_bins = ((finite.len() as f64).log2().ceil() as usize + 1).max(1);
    let width = ((max - min) / n_bins as f64).max(f64::MIN_POSITIVE);

    let mut counts = vec![0usize; n_bins];
    for &v in &finite {
        let idx = (((v - min) / width) as usize).min(n_bins - 1);
        counts[idx] += 1;
    }

    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            Bar::new(min + (i as f64 + 0.5) * width, c as f64)
                .width(width)
                .fill(ACCENT)
        })
        .collect();

    Plot::new(id)
        .height(CHART_HEIGHT)
        .x_axis_label(x_label)
        .y_axis_label("Count")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(x_label));
        });
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

/// Scatter plot of (x, y) pairs.
pub fn scatter(ui: &mut Ui, id: &str, x_label: &str, y_label: &str, pairs: &[[f64; 2]]) {
    let points: PlotPoints = pairs
        .iter()
        .filter(|p| p[0].is_finite() && p[1].is_finite())
        .copied()
        .collect();

    Plot::new(id)
        .height(CHART_HEIGHT)
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .show(ui, |plot_ui| {
            plot_ui.points(Points::new(points).radius(2.0).color(ACCENT));
        });
}

// ---------------------------------------------------------------------------
// Categorical bar chart
// ---------------------------------------------------------------------------

/// Bar chart over named categories ("No"/"Yes" breakdowns).
pub fn category_bars(ui: &mut Ui, id: &str, y_label: &str, categories: &[(&str, f64)]) {
    let bars: Vec<Bar> = categories
        .iter()
        .enumerate()
        .map(|(i, (name, value))| {
            Bar::new(i as f64, *value)
                .width(0.6)
                .name(*name)
                .fill(ACCENT)
        })
        .collect();

    let labels: Vec<String> = categories.iter().map(|(n, _)| n.to_string()).collect();

    Plot::new(id)
        .height(CHART_HEIGHT)
        .y_axis_label(y_label)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round() as i64;
            if (mark.value - idx as f64).abs() < 1e-6 && idx >= 0 && (idx as usize) < labels.len()
            {
                labels[idx as usize].clone()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Annotated correlation heatmap
// ---------------------------------------------------------------------------

/// Annotated colour matrix: one coloured cell per correlation coefficient,
/// value printed to 2 decimals, diverging blue–white–red scale over [−1, 1].
pub fn correlation_heatmap(ui: &mut Ui, labels: &[&str], matrix: &[Vec<f64>]) {
    let cell = Vec2::new(110.0, 40.0);

    egui::Grid::new("correlation_heatmap")
        .spacing([2.0, 2.0])
        .show(ui, |ui| {
            // Header row: empty corner + column labels.
            ui.label("");
            for label in labels {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(*label).small().strong());
                });
            }
            ui.end_row();

            for (i, row) in matrix.iter().enumerate() {
                ui.label(egui::RichText::new(labels[i]).small().strong());
                for &value in row {
                    heatmap_cell(ui, cell, value);
                }
                ui.end_row();
            }
        });
}

fn heatmap_cell(ui: &mut Ui, size: Vec2, value: f64) {
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let fill = diverging_color(value);
    ui.painter().rect_filled(rect, 2, fill);

    let text = if value.is_finite() {
        format!("{value:.2}")
    } else {
        "–".to_string()
    };
    // Dark text on pale cells, light text on saturated ones.
    let text_color = if value.abs() > 0.6 {
        Color32::WHITE
    } else {
        Color32::from_gray(40)
    };
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        text,
        FontId::proportional(13.0),
        text_color,
    );
}

/// Map r ∈ [−1, 1] to a diverging blue–white–red scale.
fn diverging_color(r: f64) -> Color32 {
    if !r.is_finite() {
        return Color32::GRAY;
    }
    let r = r.clamp(-1.0, 1.0) as f32;
    let white: LinSrgb = Srgb::new(0.97, 0.97, 0.97).into_linear();
    let blue: LinSrgb = Srgb::new(0.13, 0.35, 0.75).into_linear();
    let red: LinSrgb = Srgb::new(0.80, 0.16, 0.16).into_linear();

    let mixed = if r < 0.0 {
        white.mix(blue, -r)
    } else {
        white.mix(red, r)
    };
    let srgb: Srgb = Srgb::from_linear(mixed);
    Color32::from_rgb(
        (srgb.red * 255.0) as u8,
        (srgb.green * 255.0) as u8,
        (srgb.blue * 255.0) as u8,
    )
}
