use crate::data::model::TripRecord;

use super::frequency::ValueCounts;

/// A station name with how many trips used it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked<T> {
    pub value: T,
    pub count: usize,
}

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Option<Ranked<String>>,
    pub end_station: Option<Ranked<String>>,
    /// (start, end) counted as one joint value.
    pub trip: Option<Ranked<(String, String)>>,
}

pub fn station_stats(trips: &[TripRecord]) -> StationStats {
    let starts = ValueCounts::from_values(trips.iter().map(|t| t.start_station.as_str()));
    let ends = ValueCounts::from_values(trips.iter().map(|t| t.end_station.as_str()));
    let pairs = ValueCounts::from_values(
        trips
            .iter()
            .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
    );

    StationStats {
        start_station: starts.mode_with_count().map(|(name, count)| Ranked {
            value: (*name).to_string(),
            count,
        }),
        end_station: ends.mode_with_count().map(|(name, count)| Ranked {
            value: (*name).to_string(),
            count,
        }),
        trip: pairs.mode_with_count().map(|((start, end), count)| Ranked {
            value: ((*start).to_string(), (*end).to_string()),
            count,
        }),
    }
}
