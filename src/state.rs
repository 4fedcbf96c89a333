use std::path::Path;
use std::time::SystemTime;

use crate::bmi::{compute_bmi, BmiInputError, BmiResult};
use crate::data::filter::AgeRange;
use crate::data::loader::{self, CLEAN_PATH};
use crate::data::model::{Column, HealthDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which page is showing in the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Exploration,
    Calculator,
}

impl View {
    pub const ALL: [View; 3] = [View::Home, View::Exploration, View::Calculator];

    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Exploration => "Dashboard",
            View::Calculator => "BMI Calculator",
        }
    }
}

/// Chart choices for the BMI exploration section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BmiChart {
    #[default]
    Boxplot,
    Histogram,
    Scatter,
}

impl BmiChart {
    pub const ALL: [BmiChart; 3] = [BmiChart::Boxplot, BmiChart::Histogram, BmiChart::Scatter];

    pub fn label(self) -> &'static str {
        match self {
            BmiChart::Boxplot => "Boxplot",
            BmiChart::Histogram => "Histogram",
            BmiChart::Scatter => "Scatter",
        }
    }
}

/// Exploration view controls.
#[derive(Debug, Clone, Default)]
pub struct ExploreState {
    pub age_range: AgeRange,
    pub bmi_chart: BmiChart,
    /// Variable pair for the significance section; no default selection.
    pub var_a: Option<Column>,
    pub var_b: Option<Column>,
}

/// Calculator form state.  `outcome` is only written on submit, so typing
/// into the inputs never recomputes anything.
#[derive(Debug, Clone, Default)]
pub struct CalcState {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub outcome: Option<Result<BmiResult, BmiInputError>>,
}

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    pub view: View,

    /// Cleaned dataset, cached between frames.
    pub dataset: Option<HealthDataset>,
    /// Modification time of the cleaned file when it was last read; the
    /// cache is invalidated whenever the file's mtime moves.
    loaded_mtime: Option<SystemTime>,
    /// Load failure shown in the top bar (typically: prepare step not run).
    pub load_error: Option<String>,

    pub explore: ExploreState,
    pub calc: CalcState,
}

impl AppState {
    /// Make sure `dataset` reflects the cleaned file on disk.  Called once
    /// per frame by the data-backed views; cheap (a single stat) unless the
    /// file changed.
    pub fn ensure_loaded(&mut self) {
        self.ensure_loaded_from(Path::new(CLEAN_PATH));
    }

    pub fn ensure_loaded_from(&mut self, path: &Path) {
        let mtime = std::fs::metadata(path).and_then(|m| m.modified()).ok();

        if mtime.is_some() && mtime == self.loaded_mtime && self.dataset.is_some() {
            return;
        }

        match loader::load_clean(path) {
            Ok(dataset) => {
                log::info!("loaded {} records from {}", dataset.len(), path.display());
                self.dataset = Some(dataset);
                self.loaded_mtime = mtime;
                self.load_error = None;
            }
            Err(e) => {
                log::error!("failed to load cleaned dataset: {e}");
                self.dataset = None;
                self.loaded_mtime = None;
                self.load_error = Some(e.to_string());
            }
        }
    }

    /// Handle the calculator's submit action.
    pub fn submit_bmi(&mut self) {
        self.calc.outcome = Some(compute_bmi(self.calc.height_cm, self.calc.weight_kg));
    }
}
