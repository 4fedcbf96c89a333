use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::filter::{filter_by_age, AGE_MAX, AGE_MIN};
use crate::data::model::{flag_counts, yes_no_label, Column, HealthDataset, Record};
use crate::data::stats::{column_correlation, correlation_matrix, describe};
use crate::state::{AppState, BmiChart, ExploreState};
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Exploration view
// ---------------------------------------------------------------------------

/// Render the exploration dashboard.
pub fn exploration_view(ui: &mut Ui, state: &mut AppState) {
    let AppState {
        dataset, explore, ..
    } = state;
    let Some(dataset) = dataset.as_ref() else {
        // Load errors are shown in the top bar; nothing to render here.
        ui.centered_and_justified(|ui| {
            ui.heading("No dataset loaded");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.heading("Health & Lifestyle Dashboard");
            ui.label(
                "Exploratory analysis of a health and lifestyle dataset: how age, BMI, \
                 smoking behaviour, physical activity and calorie intake relate to disease \
                 risk and to each other.",
            );
            ui.add_space(8.0);

            age_slider(ui, explore);
            let filtered = filter_by_age(&dataset.records, &explore.age_range);

            ui.add_space(12.0);
            overview_section(ui, &filtered);

            ui.add_space(12.0);
            ui.heading("Age Distribution (Boxplot)");
            ui.label(RichText::new("Distribution of ages in the selected group.").weak());
            let ages: Vec<f64> = filtered.iter().map(|r| r.age as f64).collect();
            plot::boxplot(ui, "age_box", Column::Age.label(), &ages);

            ui.add_space(12.0);
            risk_sections(ui, &filtered);

            ui.add_space(12.0);
            bmi_section(ui, explore, &filtered);

            ui.add_space(12.0);
            heatmap_section(ui, dataset);

            ui.add_space(12.0);
            significance_section(ui, explore, dataset);

            ui.add_space(16.0);
        });
}

// ---------------------------------------------------------------------------
// Controls & sections
// ---------------------------------------------------------------------------

fn age_slider(ui: &mut Ui, explore: &mut ExploreState) {
    ui.label(RichText::new(
        "Use the sliders to focus the analysis on a specific age group. \
         All visualizations below update dynamically based on the selected age range.",
    ).weak());
    ui.horizontal(|ui| {
        ui.label("Age range");
        ui.add(egui::Slider::new(&mut explore.age_range.lower, AGE_MIN..=AGE_MAX).text("from"));
        ui.add(egui::Slider::new(&mut explore.age_range.upper, AGE_MIN..=AGE_MAX).text("to"));
    });
    explore.age_range.normalise();
}

fn overview_section(ui: &mut Ui, filtered: &[&Record]) {
    ui.heading("Dataset Overview");
    ui.label(RichText::new(
        "Average values, variability and ranges of the main numerical features \
         for the selected age group.",
    ).weak());

    let summaries = describe(filtered);

    TableBuilder::new(ui)
        .striped(true)
        .column(TableColumn::auto().at_least(180.0))
        .columns(TableColumn::auto().at_least(60.0), 8)
        .header(20.0, |mut header| {
            for title in [
                "Variable", "count", "mean", "std", "min", "25%", "50%", "75%", "max",
            ] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for s in &summaries {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(s.column.label());
                    });
                    row.col(|ui| {
                        ui.label(s.count.to_string());
                    });
                    for value in [s.mean, s.std, s.min, s.q1, s.median, s.q3, s.max] {
                        row.col(|ui| {
                            ui.label(if value.is_finite() {
                                format!("{value:.2}")
                            } else {
                                "–".to_string()
                            });
                        });
                    }
                });
            }
        });
}

fn risk_sections(ui: &mut Ui, filtered: &[&Record]) {
    let (risk_no, risk_yes) = flag_counts(filtered, |r| r.disease_risk);
    let total = (risk_no + risk_yes).max(1) as f64;

    ui.heading("Disease Risk Proportion");
    ui.label(RichText::new(
        "Share of individuals with and without disease risk within the selected age range.",
    ).weak());
    plot::category_bars(
        ui,
        "risk_proportion",
        "Share (%)",
        &[
            (yes_no_label(0), risk_no as f64 / total * 100.0),
            (yes_no_label(1), risk_yes as f64 / total * 100.0),
        ],
    );

    ui.add_space(12.0);
    ui.heading("Disease Risk Distribution");
    ui.label(RichText::new(
        "Absolute number of individuals in each disease risk category.",
    ).weak());
    plot::category_bars(
        ui,
        "risk_counts",
        "Count",
        &[
            (yes_no_label(0), risk_no as f64),
            (yes_no_label(1), risk_yes as f64),
        ],
    );

    ui.add_space(12.0);
    let (smoker_no, smoker_yes) = flag_counts(filtered, |r| r.smoker);
    ui.heading("Smoker Distribution");
    ui.label(RichText::new("Number of smokers and non-smokers.").weak());
    plot::category_bars(
        ui,
        "smoker_counts",
        "Count",
        &[
            (yes_no_label(0), smoker_no as f64),
            (yes_no_label(1), smoker_yes as f64),
        ],
    );
}

fn bmi_section(ui: &mut Ui, explore: &mut ExploreState, filtered: &[&Record]) {
    ui.heading("BMI Visual Analysis");
    ui.label("Body Mass Index explored from different visual perspectives.");

    ui.horizontal(|ui| {
        ui.label("Select chart to display:");
        for chart in BmiChart::ALL {
            ui.radio_value(&mut explore.bmi_chart, chart, chart.label());
        }
    });

    let bmi: Vec<f64> = filtered.iter().map(|r| r.bmi).collect();
    match explore.bmi_chart {
        BmiChart::Boxplot => {
            ui.label(RichText::new("Shows BMI spread and potential outliers.").weak());
            plot::boxplot(ui, "bmi_box", Column::Bmi.label(), &bmi);
        }
        BmiChart::Histogram => {
            ui.label(RichText::new(
                "Shows how BMI values are distributed across the population.",
            ).weak());
            plot::histogram(ui, "bmi_hist", Column::Bmi.label(), &bmi);
        }
        BmiChart::Scatter => {
            ui.label(RichText::new("Shows the relationship between age and BMI.").weak());
            let pairs: Vec<[f64; 2]> = filtered.iter().map(|r| [r.age as f64, r.bmi]).collect();
            plot::scatter(
                ui,
                "bmi_scatter",
                Column::Age.label(),
                Column::Bmi.label(),
                &pairs,
            );
        }
    }
}

fn heatmap_section(ui: &mut Ui, dataset: &HealthDataset) {
    ui.heading("Correlation Heatmap");
    ui.label(
        "Relationships between key numerical variables: which factors tend to \
         increase or decrease together, and how strongly.",
    );
    ui.label(RichText::new(
        "Values close to 1 indicate a strong positive relationship, values close to -1 \
         a strong negative relationship, and values near 0 little or no relationship.",
    ).weak());

    // Computed over the full dataset; the age filter deliberately does not
    // apply to this section.
    let matrix = correlation_matrix(dataset);
    let labels: Vec<&str> = Column::HEATMAP.iter().map(|c| c.label()).collect();
    plot::correlation_heatmap(ui, &labels, &matrix);
}

fn significance_section(ui: &mut Ui, explore: &mut ExploreState, dataset: &HealthDataset) {
    ui.heading("Correlation & Statistical Significance");
    ui.label(
        "Examine the relationship between two numerical variables. Correlation \
         indicates how strongly two variables move together; statistical significance \
         whether the observed relationship is likely meaningful or due to chance.",
    );
    ui.label(RichText::new(
        "Correlation values range from -1 to 1. Values closer to these extremes \
         indicate stronger relationships.",
    ).weak());

    ui.horizontal(|ui| {
        variable_selector(ui, "first_var", "Select first variable", &mut explore.var_a);
        variable_selector(ui, "second_var", "Select second variable", &mut explore.var_b);
    });

    let (Some(a), Some(b)) = (explore.var_a, explore.var_b) else {
        return;
    };

    ui.add_space(6.0);
    ui.strong("Correlation Result");

    // Over the full dataset, not the age-filtered selection.
    let result = column_correlation(dataset, a, b);
    ui.label(format!("Correlation: {:.3}", result.r));
    ui.label(format!("p-value: {:.5}", result.p_value));
    if a != b {
        if result.is_significant() {
            ui.label(RichText::new("Result is statistically significant").strong());
        } else {
            ui.label(RichText::new("Result is not statistically significant").strong());
        }
    }
}

fn variable_selector(ui: &mut Ui, id: &str, label: &str, selection: &mut Option<Column>) {
    ui.vertical(|ui| {
        ui.label(label);
        let current = selection.map(|c| c.label()).unwrap_or("–");
        egui::ComboBox::from_id_salt(id)
            .selected_text(current)
            .show_ui(ui, |ui| {
                for col in Column::ALL {
                    if ui
                        .selectable_label(*selection == Some(col), col.label())
                        .clicked()
                    {
                        *selection = Some(col);
                    }
                }
            });
    });
}
