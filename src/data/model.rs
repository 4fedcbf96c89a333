use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Record – one row of the health/lifestyle table
// ---------------------------------------------------------------------------

/// A single row of the dataset.  Field order defines the CSV column order,
/// so writing the cleaned file preserves the raw file's layout.
///
/// `gender` is the one recoded column: 0 = Male, 1 = Female, `None` when the
/// raw value was neither literal (serialised as an empty cell).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub age: u32,
    pub gender: Option<u8>,
    pub bmi: f64,
    pub daily_steps: u32,
    pub sleep_hours: f64,
    pub water_intake_l: f64,
    pub calories_consumed: f64,
    pub smoker: u8,
    pub alcohol: f64,
    pub resting_hr: f64,
    pub systolic_bp: f64,
    pub diastolic_bp: f64,
    pub cholesterol: f64,
    pub family_history: u8,
    pub disease_risk: u8,
}

// ---------------------------------------------------------------------------
// Column – enumerated numeric columns with display labels
// ---------------------------------------------------------------------------

/// Every numeric column of the cleaned table (after recoding, that is all of
/// them, gender included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Age,
    Gender,
    Bmi,
    DailySteps,
    SleepHours,
    WaterIntakeL,
    CaloriesConsumed,
    Smoker,
    Alcohol,
    RestingHr,
    SystolicBp,
    DiastolicBp,
    Cholesterol,
    FamilyHistory,
    DiseaseRisk,
}

impl Column {
    /// All columns, in CSV order.
    pub const ALL: [Column; 16] = [
        Column::Id,
        Column::Age,
        Column::Gender,
        Column::Bmi,
        Column::DailySteps,
        Column::SleepHours,
        Column::WaterIntakeL,
        Column::CaloriesConsumed,
        Column::Smoker,
        Column::Alcohol,
        Column::RestingHr,
        Column::SystolicBp,
        Column::DiastolicBp,
        Column::Cholesterol,
        Column::FamilyHistory,
        Column::DiseaseRisk,
    ];

    /// Columns included in the correlation heatmap.
    pub const HEATMAP: [Column; 4] = [
        Column::Age,
        Column::Bmi,
        Column::DailySteps,
        Column::CaloriesConsumed,
    ];

    /// The snake_case column name as it appears in the CSV header.
    pub fn key(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Age => "age",
            Column::Gender => "gender",
            Column::Bmi => "bmi",
            Column::DailySteps => "daily_steps",
            Column::SleepHours => "sleep_hours",
            Column::WaterIntakeL => "water_intake_l",
            Column::CaloriesConsumed => "calories_consumed",
            Column::Smoker => "smoker",
            Column::Alcohol => "alcohol",
            Column::RestingHr => "resting_hr",
            Column::SystolicBp => "systolic_bp",
            Column::DiastolicBp => "diastolic_bp",
            Column::Cholesterol => "cholesterol",
            Column::FamilyHistory => "family_history",
            Column::DiseaseRisk => "disease_risk",
        }
    }

    /// Human-readable label for tables, axes and selectors.
    pub fn label(self) -> &'static str {
        readable_name(self.key())
    }

    /// Extract this column's value from a record.  Missing gender → NaN so
    /// downstream statistics can skip it.
    pub fn value(self, rec: &Record) -> f64 {
        match self {
            Column::Id => rec.id as f64,
            Column::Age => rec.age as f64,
            Column::Gender => rec.gender.map(|g| g as f64).unwrap_or(f64::NAN),
            Column::Bmi => rec.bmi,
            Column::DailySteps => rec.daily_steps as f64,
            Column::SleepHours => rec.sleep_hours,
            Column::WaterIntakeL => rec.water_intake_l,
            Column::CaloriesConsumed => rec.calories_consumed,
            Column::Smoker => rec.smoker as f64,
            Column::Alcohol => rec.alcohol,
            Column::RestingHr => rec.resting_hr,
            Column::SystolicBp => rec.systolic_bp,
            Column::DiastolicBp => rec.diastolic_bp,
            Column::Cholesterol => rec.cholesterol,
            Column::FamilyHistory => rec.family_history as f64,
            Column::DiseaseRisk => rec.disease_risk as f64,
        }
    }
}

/// Map a raw column name to its display label, falling back to the name
/// itself for anything unmapped.
pub fn readable_name(key: &str) -> &str {
    match key {
        "id" => "ID",
        "age" => "Age",
        "gender" => "Gender",
        "bmi" => "Body Mass Index (BMI)",
        "daily_steps" => "Daily Steps",
        "sleep_hours" => "Sleep Duration",
        "water_intake_l" => "Daily Water Intake",
        "calories_consumed" => "Daily Calorie Intake (kcal)",
        "smoker" => "Smoking Status",
        "alcohol" => "Alcohol Consumption",
        "resting_hr" => "Resting Heart Rate (bpm)",
        "systolic_bp" => "Systolic Blood Pressure (mmHg)",
        "diastolic_bp" => "Diastolic Blood Pressure (mmHg)",
        "cholesterol" => "Cholesterol Level (mg/dL)",
        "family_history" => "Family History of Disease",
        "disease_risk" => "Disease Risk",
        other => other,
    }
}

/// Display label for the binary categorical columns (disease_risk, smoker).
pub fn yes_no_label(flag: u8) -> &'static str {
    if flag == 0 { "No" } else { "Yes" }
}

// ---------------------------------------------------------------------------
// HealthDataset – the loaded cleaned table
// ---------------------------------------------------------------------------

/// The full cleaned dataset.
#[derive(Debug, Clone, Default)]
pub struct HealthDataset {
    pub records: Vec<Record>,
}

impl HealthDataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All values of one column, in row order (missing gender → NaN).
    pub fn column(&self, col: Column) -> Vec<f64> {
        self.records.iter().map(|r| col.value(r)).collect()
    }

    /// Mean of a column over the full dataset, skipping non-finite values.
    pub fn column_mean(&self, col: Column) -> f64 {
        let values: Vec<f64> = self
            .records
            .iter()
            .map(|r| col.value(r))
            .filter(|v| v.is_finite())
            .collect();
        if values.is_empty() {
            f64::NAN
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        }
    }
}

/// Count records per value of a binary flag column, as (zeros, ones).
pub fn flag_counts<R: std::borrow::Borrow<Record>>(
    records: &[R],
    flag: impl Fn(&Record) -> u8,
) -> (usize, usize) {
    let ones = records.iter().filter(|r| flag(r.borrow()) == 1).count();
    (records.len() - ones, ones)
}
