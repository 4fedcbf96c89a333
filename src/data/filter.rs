use super::model::Record;

// ---------------------------------------------------------------------------
// Age range filter
// ---------------------------------------------------------------------------

/// Slider bounds for the age filter.
pub const AGE_MIN: u32 = 18;
pub const AGE_MAX: u32 = 80;
/// Default selection when the exploration view opens.
pub const AGE_DEFAULT: (u32, u32) = (25, 60);

/// Inclusive age-range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    pub lower: u32,
    pub upper: u32,
}

impl Default for AgeRange {
    fn default() -> Self {
        Self {
            lower: AGE_DEFAULT.0,
            upper: AGE_DEFAULT.1,
        }
    }
}

impl AgeRange {
    /// Keep lower ≤ upper after a slider drag, moving the other bound along.
    pub fn normalise(&mut self) {
        if self.lower > self.upper {
            std::mem::swap(&mut self.lower, &mut self.upper);
        }
    }

    pub fn contains(&self, age: u32) -> bool {
        age >= self.lower && age <= self.upper
    }
}

/// Records with age in `[lower, upper]`, in the original row order.
pub fn filter_by_age<'a>(records: &'a [Record], range: &AgeRange) -> Vec<&'a Record> {
    records.iter().filter(|r| range.contains(r.age)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn rec(age: u32) -> Record {
        Record {
            id: age,
            age,
            gender: Some(0),
            bmi: 22.0,
            daily_steps: 8000,
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
    fn bounds_are_inclusive() {
        let records: Vec<Record> = [24, 25, 40, 60, 61].into_iter().map(rec).collect();
        let range = AgeRange {
            lower: 25,
            upper: 60,
        };
        let ages: Vec<u32> = filter_by_age(&records, &range).iter().map(|r| r.age).collect();
        assert_eq!(ages, vec![25, 40, 60]);
    }

    #[test]
    fn filtered_set_is_subset() {
        let records: Vec<Record> = (18..=80).map(rec).collect();
        let range = AgeRange {
            lower: 30,
            upper: 35,
        };
        let filtered = filter_by_age(&records, &range);
        assert_eq!(filtered.len(), 6);
        assert!(filtered.iter().all(|r| range.contains(r.age)));
    }

    #[test]
    fn degenerate_range_keeps_exact_age() {
        let records: Vec<Record> = [29, 30, 31].into_iter().map(rec).collect();
        let range = AgeRange {
            lower: 30,
            upper: 30,
        };
        let filtered = filter_by_age(&records, &range);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].age, 30);
    }

    #[test]
    fn normalise_swaps_inverted_bounds() {
        let mut range = AgeRange {
            lower: 50,
            upper: 30,
        };
        range.normalise();
        assert_eq!((range.lower, range.upper), (30, 50));
    }
}
