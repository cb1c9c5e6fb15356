use crate::data::model::{Day, TripRecord};

use super::frequency::ValueCounts;

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    /// Calendar month number.
    pub most_common_month: Option<u32>,
    pub most_common_day: Option<Day>,
    pub most_common_hour: Option<u32>,
}

pub fn time_stats(trips: &[TripRecord]) -> TimeStats {
    TimeStats {
        most_common_month: ValueCounts::from_values(trips.iter().map(|t| t.month)).mode().copied(),
        most_common_day: ValueCounts::from_values(trips.iter().map(|t| t.day)).mode().copied(),
        most_common_hour: ValueCounts::from_values(trips.iter().map(|t| t.hour)).mode().copied(),
    }
}

/// `7` → `"07:00"`.
pub fn format_hour(hour: u32) -> String {
    format!("{hour:02}:00")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::trip;
    use crate::data::model::City;

    #[test]
    fn picks_most_frequent_parts() {
        let trips = vec![
            trip(City::Chicago, (2017, 3, 6), 8, 60.0),  // Mon
            trip(City::Chicago, (2017, 3, 7), 8, 60.0),  // Tue
            trip(City::Chicago, (2017, 3, 14), 17, 60.0), // Tue
            trip(City::Chicago, (2017, 1, 3), 17, 60.0), // Tue
            trip(City::Chicago, (2017, 1, 9), 8, 60.0),  // Mon
        ];
        let stats = time_stats(&trips);
        assert_eq!(stats.most_common_month, Some(3));
        assert_eq!(stats.most_common_day, Some(Day::Tuesday));
        assert_eq!(stats.most_common_hour, Some(8));
    }

    #[test]
    fn tied_hours_pick_earliest() {
        let trips = vec![
            trip(City::Chicago, (2017, 2, 1), 18, 60.0),
            trip(City::Chicago, (2017, 2, 1), 6, 60.0),
        ];
        assert_eq!(time_stats(&trips).most_common_hour, Some(6));
    }

    #[test]
    fn empty_input_yields_nothing() {
        let stats = time_stats(&[]);
        assert_eq!(stats.most_common_month, None);
        assert_eq!(stats.most_common_day, None);
        assert_eq!(stats.most_common_hour, None);
    }

    #[test]
    fn hour_is_zero_padded() {
        assert_eq!(format_hour(0), "00:00");
        assert_eq!(format_hour(7), "07:00");
        assert_eq!(format_hour(17), "17:00");
    }
}
