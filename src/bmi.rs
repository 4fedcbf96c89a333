use std::fmt;

// ---------------------------------------------------------------------------
// BMI formula and classification bands
// ---------------------------------------------------------------------------

/// BMI value at which the progress bar saturates.
const PROGRESS_SCALE: f64 = 40.0;

/// The four classification bands, ascending and non-overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiClass {
    Underweight,
    NormalWeight,
    Overweight,
    Obesity,
}

impl fmt::Display for BmiClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiClass::Underweight => "Underweight",
            BmiClass::NormalWeight => "Normal weight",
            BmiClass::Overweight => "Overweight",
            BmiClass::Obesity => "Obesity",
        };
        write!(f, "{label}")
    }
}

impl BmiClass {
    /// Classify a BMI value.  Total over [0, ∞).
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiClass::Underweight
        } else if bmi < 25.0 {
            BmiClass::NormalWeight
        } else if bmi < 30.0 {
            BmiClass::Overweight
        } else {
            BmiClass::Obesity
        }
    }
}

/// A computed BMI with its classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    pub bmi: f64,
    pub class: BmiClass,
}

impl BmiResult {
    /// Fill fraction for the progress bar, clamped to 1.
    pub fn progress(&self) -> f64 {
        (self.bmi / PROGRESS_SCALE).min(1.0)
    }
}

/// Compute BMI from height in centimetres and weight in kilograms.
/// Fails when either input is not strictly positive; no result is produced
/// in that case.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> Result<BmiResult, BmiInputError> {
    if height_cm <= 0.0 || weight_kg <= 0.0 {
        return Err(BmiInputError);
    }
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Ok(BmiResult {
        bmi,
        class: BmiClass::from_bmi(bmi),
    })
}

/// Height or weight was zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Please enter height and weight.")]
pub struct BmiInputError;
