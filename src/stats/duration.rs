use crate::data::model::TripRecord;

/// Total and average trip duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total: f64,
    pub count: usize,
}

impl DurationStats {
    /// `None` for an empty dataset rather than NaN.
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.total / self.count as f64)
    }
}

pub fn duration_stats(trips: &[TripRecord]) -> DurationStats {
    DurationStats {
        // `Sum for f64` starts from -0.0, which would print as "-0".
        total: trips.iter().fold(0.0, |acc, t| acc + t.trip_duration),
        count: trips.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::trip;
    use crate::data::model::City;

    #[test]
    fn sum_and_mean() {
        let trips: Vec<_> = [321.0, 1610.0, 416.0, 350.0]
            .into_iter()
            .map(|d| trip(City::NewYorkCity, (2017, 2, 1), 10, d))
            .collect();
        let stats = duration_stats(&trips);
        assert_eq!(stats.total, 2697.0);
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean(), Some(674.25));
    }

    #[test]
    fn empty_dataset_has_zero_total_and_no_mean() {
        let stats = duration_stats(&[]);
        assert_eq!(stats.total, 0.0);
        assert!(stats.total.is_sign_positive());
        assert_eq!(stats.total.to_string(), "0");
        assert_eq!(stats.mean(), None);
    }
}
