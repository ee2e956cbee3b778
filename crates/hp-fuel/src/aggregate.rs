//! Per-day aggregation over the reporting calendar.

use crate::calendar::{DAYS_IN_YEAR, day_index};
use crate::record::{FuelKind, FuelRecord};
use tracing::warn;

/// Daily totals for each fuel type, one entry per calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySeries {
    pub unleaded: Vec<f64>,
    pub diesel: Vec<f64>,
    pub e85: Vec<f64>,
}

impl DailySeries {
    pub fn zeros() -> Self {
        Self {
            unleaded: vec![0.0; DAYS_IN_YEAR],
            diesel: vec![0.0; DAYS_IN_YEAR],
            e85: vec![0.0; DAYS_IN_YEAR],
        }
    }

    pub fn series(&self, kind: FuelKind) -> &[f64] {
        match kind {
            FuelKind::Unleaded => &self.unleaded,
            FuelKind::Diesel => &self.diesel,
            FuelKind::E85 => &self.e85,
        }
    }

    pub fn total(&self, kind: FuelKind) -> f64 {
        self.series(kind).iter().sum()
    }

    fn add(&mut self, index: usize, record: &FuelRecord) {
        self.unleaded[index] += record.unleaded;
        self.diesel[index] += record.diesel;
        self.e85[index] += record.e85;
    }
}

/// Aggregated log plus the rows that fell outside the calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub daily: DailySeries,
    pub skipped: usize,
}

/// Sum every record into its calendar day. Several rows for the same day add
/// up; days without rows stay at zero. Rows dated outside the calendar are
/// skipped and counted.
pub fn aggregate(records: &[FuelRecord]) -> Aggregation {
    let mut daily = DailySeries::zeros();
    let mut skipped = 0;

    for record in records {
        match day_index(record.month, record.day) {
            Some(index) => daily.add(index, record),
            None => {
                skipped += 1;
                warn!(
                    month = record.month,
                    day = record.day,
                    "fuel record outside the reporting calendar skipped"
                );
            }
        }
    }

    Aggregation { daily, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(month: u32, day: u32, unleaded: f64) -> FuelRecord {
        FuelRecord {
            month,
            day,
            unleaded,
            diesel: 1.0,
            e85: 0.5,
        }
    }

    #[test]
    fn duplicate_days_are_summed() {
        let records = [record(1, 2, 10.0), record(1, 2, 5.5), record(12, 31, 3.0)];
        let agg = aggregate(&records);
        assert_eq!(agg.skipped, 0);
        assert_eq!(agg.daily.unleaded[1], 15.5);
        assert_eq!(agg.daily.diesel[1], 2.0);
        assert_eq!(agg.daily.unleaded[364], 3.0);
        assert_eq!(agg.daily.unleaded[0], 0.0);
    }

    #[test]
    fn leap_day_is_skipped() {
        let agg = aggregate(&[record(2, 29, 100.0), record(3, 1, 1.0)]);
        assert_eq!(agg.skipped, 1);
        assert_eq!(agg.daily.total(FuelKind::Unleaded), 1.0);
        assert_eq!(agg.daily.unleaded[59], 1.0);
    }

    #[test]
    fn empty_log_gives_zero_year() {
        let agg = aggregate(&[]);
        for kind in FuelKind::ALL {
            assert_eq!(agg.daily.series(kind).len(), DAYS_IN_YEAR);
            assert_eq!(agg.daily.total(kind), 0.0);
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_record() -> impl Strategy<Value = FuelRecord> {
        (1u32..=12, 1u32..=28, 0.0f64..1000.0, 0.0f64..500.0, 0.0f64..50.0).prop_map(
            |(month, day, unleaded, diesel, e85)| FuelRecord {
                month,
                day,
                unleaded,
                diesel,
                e85,
            },
        )
    }

    proptest! {
        #[test]
        fn aggregation_is_loss_free(records in prop::collection::vec(any_record(), 0..200)) {
            let agg = aggregate(&records);
            prop_assert_eq!(agg.skipped, 0);
            for kind in FuelKind::ALL {
                let raw: f64 = records.iter().map(|r| r.amount(kind)).sum();
                let daily = agg.daily.total(kind);
                prop_assert!((raw - daily).abs() <= 1e-9 * raw.max(1.0));
            }
        }
    }
}
