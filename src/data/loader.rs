use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::model::{Column, HealthDataset, Record};

/// Fixed location of the raw export.
pub const RAW_PATH: &str = "data/raw/health_lifestyle_dataset.csv";
/// Fixed location of the cleaned table the dashboard reads.
pub const CLEAN_PATH: &str = "data/cleaned/clean_health.csv";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DataError {
    #[error("raw dataset not found at {0}")]
    MissingFile(String),
    #[error("cleaned dataset not found at {0} (run the prepare-data step first)")]
    MissingClean(String),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Data preparation: raw CSV → cleaned table
// ---------------------------------------------------------------------------

/// A raw row, identical to [`Record`] except that `gender` is still the
/// original string category.
#[derive(Debug, Deserialize)]
struct RawRecord {
    id: u32,
    age: u32,
    gender: String,
    bmi: f64,
    daily_steps: u32,
    sleep_hours: f64,
    water_intake_l: f64,
    calories_consumed: f64,
    smoker: u8,
    alcohol: f64,
    resting_hr: f64,
    systolic_bp: f64,
    diastolic_bp: f64,
    cholesterol: f64,
    family_history: u8,
    disease_risk: u8,
}

/// Recode a raw gender category.  Anything outside the two expected literals
/// becomes `None` (missing), mirroring the lenient category mapping of the
/// source data pipeline.
pub fn recode_gender(raw: &str) -> Option<u8> {
    match raw {
        "Male" => Some(0),
        "Female" => Some(1),
        _ => None,
    }
}

fn clean_record(raw: RawRecord) -> Record {
    Record {
        id: raw.id,
        age: raw.age,
        gender: recode_gender(&raw.gender),
        bmi: raw.bmi,
        daily_steps: raw.daily_steps,
        sleep_hours: raw.sleep_hours,
        water_intake_l: raw.water_intake_l,
        calories_consumed: raw.calories_consumed,
        smoker: raw.smoker,
        alcohol: raw.alcohol,
        resting_hr: raw.resting_hr,
        systolic_bp: raw.systolic_bp,
        diastolic_bp: raw.diastolic_bp,
        cholesterol: raw.cholesterol,
        family_history: raw.family_history,
        disease_risk: raw.disease_risk,
    }
}

/// Read the raw CSV, recode the gender column and log schema diagnostics.
/// With `save_clean`, also persist the cleaned table (creating the target
/// directory, overwriting any previous file).
pub fn load_and_clean(raw_path: &Path, save_clean: bool) -> Result<HealthDataset, DataError> {
    if !raw_path.exists() {
        return Err(DataError::MissingFile(raw_path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(raw_path)?;
    let mut records = Vec::new();
    for result in reader.deserialize::<RawRecord>() {
        records.push(clean_record(result?));
    }
    let dataset = HealthDataset::new(records);

    log_diagnostics(&dataset);

    if save_clean {
        let clean_path = Path::new(CLEAN_PATH);
        write_clean(&dataset, clean_path)?;
        log::info!("cleaned CSV saved to {CLEAN_PATH}");
    }

    Ok(dataset)
}

/// Schema report: per-column dtype and missing-value count.  Only `gender`
/// can be missing after typed parsing, but every column is reported.
fn log_diagnostics(dataset: &HealthDataset) {
    for col in Column::ALL {
        let dtype = match col {
            Column::Id | Column::Age | Column::DailySteps => "int",
            Column::Gender => "int (nullable)",
            Column::Smoker | Column::FamilyHistory | Column::DiseaseRisk => "int",
            _ => "float",
        };
        let missing = dataset
            .records
            .iter()
            .filter(|r| !col.value(r).is_finite())
            .count();
        log::info!("{:<20} {:<15} missing: {}", col.key(), dtype, missing);
    }
}

/// Write the cleaned table: header row, original column order, no index
/// column.  `gender: None` serialises as an empty cell.
pub fn write_clean(dataset: &HealthDataset, path: &Path) -> Result<(), DataError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    for rec in &dataset.records {
        writer.serialize(rec)?;
    }
    writer.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Cleaned-table loading (dashboard side)
// ---------------------------------------------------------------------------

/// Load the cleaned table the dashboard renders from.
pub fn load_clean(path: &Path) -> Result<HealthDataset, DataError> {
    if !path.exists() {
        return Err(DataError::MissingClean(path.display().to_string()));
    }
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for result in reader.deserialize::<Record>() {
        records.push(result?);
    }
    Ok(HealthDataset::new(records))
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    const RAW_HEADER: &str = "id,age,gender,bmi,daily_steps,sleep_hours,water_intake_l,\
calories_consumed,smoker,alcohol,resting_hr,systolic_bp,diastolic_bp,cholesterol,\
family_history,disease_risk";

    fn write_raw(rows: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "{RAW_HEADER}").unwrap();
        for row in rows {
            writeln!(f, "{row}").unwrap();
        }
        dir
    }

    #[test]
    fn recode_gender_is_total() {
        assert_eq!(recode_gender("Male"), Some(0));
        assert_eq!(recode_gender("Female"), Some(1));
        assert_eq!(recode_gender("male"), None);
        assert_eq!(recode_gender("Other"), None);
        assert_eq!(recode_gender(""), None);
    }

    #[test]
    fn load_and_clean_recodes_gender() {
        let dir = write_raw(&[
            "1,34,Male,24.2,9000,7.5,2.1,2300,0,1.0,62,118,76,175,0,0",
            "2,58,Female,29.8,4000,6.0,1.5,2600,1,3.0,78,140,90,230,1,1",
            "3,41,Unknown,26.1,6000,6.5,1.8,2400,0,0.0,70,125,82,190,0,0",
        ]);
        let ds = load_and_clean(&dir.path().join("raw.csv"), false).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records[0].gender, Some(0));
        assert_eq!(ds.records[1].gender, Some(1));
        assert_eq!(ds.records[2].gender, None);
        // Everything else passes through unchanged.
        assert_eq!(ds.records[1].age, 58);
        assert_eq!(ds.records[1].disease_risk, 1);
    }

    #[test]
    fn missing_raw_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_and_clean(&dir.path().join("nope.csv"), false).unwrap_err();
        assert!(matches!(err, DataError::MissingFile(_)));
    }

    #[test]
    fn missing_clean_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_clean(&dir.path().join("clean.csv")).unwrap_err();
        assert!(matches!(err, DataError::MissingClean(_)));
    }

    #[test]
    fn clean_write_read_round_trip() {
        let dir = write_raw(&[
            "1,34,Male,24.2,9000,7.5,2.1,2300,0,1.0,62,118,76,175,0,0",
            "2,58,NotAGender,29.8,4000,6.0,1.5,2600,1,3.0,78,140,90,230,1,1",
        ]);
        let ds = load_and_clean(&dir.path().join("raw.csv"), false).unwrap();

        let clean_path = dir.path().join("sub").join("clean.csv");
        write_clean(&ds, &clean_path).unwrap();
        let reread = load_clean(&clean_path).unwrap();

        assert_eq!(reread.len(), ds.len());
        assert_eq!(reread.records, ds.records);

        // Header matches the raw column order, unmapped gender stays empty.
        let text = std::fs::read_to_string(&clean_path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), RAW_HEADER);
        assert!(lines.next().unwrap().starts_with("1,34,0,"));
        assert!(lines.next().unwrap().starts_with("2,58,,"));
    }

    #[test]
    fn write_clean_overwrites_existing() {
        let dir = write_raw(&["1,34,Male,24.2,9000,7.5,2.1,2300,0,1.0,62,118,76,175,0,0"]);
        let ds = load_and_clean(&dir.path().join("raw.csv"), false).unwrap();
        let clean_path = dir.path().join("clean.csv");
        std::fs::write(&clean_path, "stale contents").unwrap();
        write_clean(&ds, &clean_path).unwrap();
        assert_eq!(load_clean(&clean_path).unwrap().len(), 1);
    }
}
