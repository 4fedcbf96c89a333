use statrs::distribution::{ContinuousCDF, StudentsT};

use super::model::{Column, HealthDataset, Record};

/// Significance threshold for the pairwise correlation verdict.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

// ---------------------------------------------------------------------------
// Summary statistics (describe table)
// ---------------------------------------------------------------------------

/// Descriptive statistics for one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: Column,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Compute count / mean / std / min / quartiles / max per column, over the
/// given (typically age-filtered) record slice.  Non-finite values (missing
/// gender) are skipped.
pub fn describe(records: &[&Record]) -> Vec<ColumnSummary> {
    Column::ALL
        .iter()
        .map(|&column| {
            let mut values: Vec<f64> = records
                .iter()
                .map(|r| column.value(r))
                .filter(|v| v.is_finite())
                .collect();
            values.sort_by(|a, b| a.total_cmp(b));
            ColumnSummary {
                column,
                count: values.len(),
                mean: mean(&values),
                std: sample_std(&values),
                min: values.first().copied().unwrap_or(f64::NAN),
                q1: quantile_sorted(&values, 0.25),
                median: quantile_sorted(&values, 0.5),
                q3: quantile_sorted(&values, 0.75),
                max: values.last().copied().unwrap_or(f64::NAN),
            }
        })
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n − 1 denominator).
fn sample_std(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (ss / (n - 1) as f64).sqrt()
}

/// Quantile with linear interpolation over an already-sorted slice.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let pos = q * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            let frac = pos - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * frac
        }
    }
}

// ---------------------------------------------------------------------------
// Pearson correlation & significance
// ---------------------------------------------------------------------------

/// Pearson correlation coefficient over pairs where both values are finite.
/// Returns NaN when fewer than two valid pairs remain or a series is
/// constant.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(&a, &b)| (a, b))
        .collect();
    let n = pairs.len();
    if n < 2 {
        return f64::NAN;
    }

    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n as f64;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        f64::NAN
    } else {
        cov / denom
    }
}

/// A pairwise correlation result: coefficient and two-tailed p-value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationResult {
    pub r: f64,
    pub p_value: f64,
}

impl CorrelationResult {
    pub fn is_significant(&self) -> bool {
        self.p_value < SIGNIFICANCE_LEVEL
    }
}

/// Pearson correlation with a two-tailed p-value from the Student's t
/// distribution with n − 2 degrees of freedom.
pub fn pearson_test(x: &[f64], y: &[f64]) -> CorrelationResult {
    let r = pearson(x, y);
    let n = x
        .iter()
        .zip(y.iter())
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .count();
    CorrelationResult {
        r,
        p_value: p_value_for(r, n),
    }
}

fn p_value_for(r: f64, n: usize) -> f64 {
    if !r.is_finite() {
        return f64::NAN;
    }
    if n < 3 {
        return f64::NAN;
    }
    let df = (n - 2) as f64;
    if (1.0 - r * r) <= 0.0 {
        // Perfectly linear data: the statistic diverges, p collapses to 0.
        return 0.0;
    }
    let t = r * (df / (1.0 - r * r)).sqrt();
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => 2.0 * dist.cdf(-t.abs()),
        Err(_) => f64::NAN,
    }
}

/// Correlation between two selected columns of the **unfiltered** dataset.
/// Identical selections short-circuit to r = 1, p = 0 without computing,
/// constant columns included.
pub fn column_correlation(dataset: &HealthDataset, a: Column, b: Column) -> CorrelationResult {
    if a == b {
        return CorrelationResult { r: 1.0, p_value: 0.0 };
    }
    pearson_test(&dataset.column(a), &dataset.column(b))
}

/// Pairwise Pearson matrix over the fixed heatmap column set, full dataset.
pub fn correlation_matrix(dataset: &HealthDataset) -> Vec<Vec<f64>> {
    let series: Vec<Vec<f64>> = Column::HEATMAP
        .iter()
        .map(|&c| dataset.column(c))
        .collect();
    series
        .iter()
        .map(|row| series.iter().map(|col| pearson(row, col)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn rec(age: u32, bmi: f64, steps: u32) -> Record {
        Record {
            id: age,
            age,
            gender: Some(0),
            bmi,
            daily_steps: steps,
            sleep_hours: 7.0,
            water_intake_l: 2.0,
            calories_consumed: 2200.0,
            smoker: 0,
            alcohol: 1.0,
            resting_hr: 65.0,
            systolic_bp: 120.0,
            diastolic_bp: 80.0,
            cholesterol: 180.0,
            family_history: 0,
            disease_risk: 0,
        }
    }

    #[test]
    fn pearson_perfect_positive() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];
        assert!((pearson(&x, &y) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn pearson_perfect_negative() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&x, &y) + 1.0).abs() < 1e-10);
    }

    #[test]
    fn pearson_constant_series_is_nan() {
        let x = [3.0, 3.0, 3.0];
        let y = [1.0, 2.0, 3.0];
        assert!(pearson(&x, &y).is_nan());
    }

    #[test]
    fn pearson_skips_nan_pairs() {
        let x = [1.0, f64::NAN, 3.0, 4.0];
        let y = [2.0, 100.0, 6.0, 8.0];
        assert!((pearson(&x, &y) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn p_value_tracks_strength() {
        // Strong linear trend with mild noise: clearly significant.
        let x: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| 3.0 * v + (v * 7.0).sin()).collect();
        let strong = pearson_test(&x, &y);
        assert!(strong.r > 0.99);
        assert!(strong.p_value < 1e-6);
        assert!(strong.is_significant());

        // Alternating noise with no trend: not significant.
        let noise: Vec<f64> = (0..30)
            .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
            .collect();
        let weak = pearson_test(&x, &noise);
        assert!(weak.r.abs() < 0.3);
        assert!(!weak.is_significant());
    }

    #[test]
    fn perfect_correlation_p_value_is_zero() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [10.0, 20.0, 30.0, 40.0, 50.0];
        let result = pearson_test(&x, &y);
        assert_eq!(result.p_value, 0.0);
    }

    #[test]
    fn self_correlation_shortcut_even_for_constant_column() {
        // smoker is constant 0 across these records; the shortcut must not
        // touch the data at all.
        let ds = HealthDataset::new(vec![rec(30, 22.0, 8000), rec(40, 25.0, 6000)]);
        let result = column_correlation(&ds, Column::Smoker, Column::Smoker);
        assert_eq!(result.r, 1.0);
        assert_eq!(result.p_value, 0.0);
    }

    #[test]
    fn distinct_columns_are_computed() {
        let ds = HealthDataset::new(vec![
            rec(20, 20.0, 9000),
            rec(30, 24.0, 7000),
            rec(40, 28.0, 5000),
            rec(50, 32.0, 3000),
        ]);
        let result = column_correlation(&ds, Column::Age, Column::Bmi);
        assert!((result.r - 1.0).abs() < 1e-10);
        let inverse = column_correlation(&ds, Column::Age, Column::DailySteps);
        assert!((inverse.r + 1.0).abs() < 1e-10);
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let ds = HealthDataset::new(vec![
            rec(20, 21.0, 9000),
            rec(35, 26.0, 7000),
            rec(50, 24.0, 4000),
            rec(65, 31.0, 2000),
        ]);
        let m = correlation_matrix(&ds);
        assert_eq!(m.len(), 4);
        for i in 0..4 {
            assert!((m[i][i] - 1.0).abs() < 1e-10);
            for j in 0..4 {
                assert!((m[i][j] - m[j][i]).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn describe_quartiles_interpolate() {
        let records = vec![
            rec(20, 10.0, 1000),
            rec(30, 20.0, 2000),
            rec(40, 30.0, 3000),
            rec(50, 40.0, 4000),
        ];
        let refs: Vec<&Record> = records.iter().collect();
        let summaries = describe(&refs);
        let bmi = summaries
            .iter()
            .find(|s| s.column == Column::Bmi)
            .unwrap();
        assert_eq!(bmi.count, 4);
        assert_eq!(bmi.mean, 25.0);
        assert_eq!(bmi.min, 10.0);
        assert_eq!(bmi.max, 40.0);
        assert_eq!(bmi.q1, 17.5);
        assert_eq!(bmi.median, 25.0);
        assert_eq!(bmi.q3, 32.5);
        // ddof = 1 sample standard deviation.
        assert!((bmi.std - 12.909944487358056).abs() < 1e-9);
    }

    #[test]
    fn describe_skips_missing_gender() {
        let mut a = rec(20, 22.0, 5000);
        a.gender = None;
        let b = rec(30, 24.0, 6000);
        let records = vec![a, b];
        let refs: Vec<&Record> = records.iter().collect();
        let summaries = describe(&refs);
        let gender = summaries
            .iter()
            .find(|s| s.column == Column::Gender)
            .unwrap();
        assert_eq!(gender.count, 1);
        assert_eq!(gender.mean, 0.0);
    }
}
