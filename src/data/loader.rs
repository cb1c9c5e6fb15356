use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::filter::FilterSelection;
use super::model::{City, TripDataset, TripRecord};
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the selected city's export and narrow it to the selection.
pub fn load_data(data_dir: &Path, selection: &FilterSelection) -> Result<TripDataset, LoadError> {
    let dataset = load_city(data_dir, selection.city)?;
    let total = dataset.len();
    let filtered = selection.apply(dataset);
    log::debug!(
        "filter month={:?} day={:?} kept {} of {total} trips",
        selection.month,
        selection.day,
        filtered.len()
    );
    Ok(filtered)
}

/// Read every trip for `city` from `<data_dir>/<city file>`.
pub fn load_city(data_dir: &Path, city: City) -> Result<TripDataset, LoadError> {
    let path = data_dir.join(city.file_name());
    let reader = csv::Reader::from_path(&path).map_err(|source| LoadError::Open {
        path: path.clone(),
        source,
    })?;
    let dataset = read_trips(reader, city, &path)?;
    log::info!("loaded {} trips for {city} from {}", dataset.len(), path.display());
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Row layout shared by the three exports. Columns are matched by header;
/// the unnamed index column is ignored and the demographic columns may be
/// missing entirely.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    // Exported as a float ("1992.0") with blanks for unknown riders.
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

fn parse_timestamp(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse trip rows from any CSV source. `path` is only used in errors.
pub fn read_trips<R: Read>(
    mut reader: csv::Reader<R>,
    city: City,
    path: &Path,
) -> Result<TripDataset, LoadError> {
    let mut trips = Vec::new();

    for (row_no, result) in reader.deserialize::<RawTrip>().enumerate() {
        // 1-based data row for messages, header excluded.
        let row = row_no + 1;
        let raw = result.map_err(|source| LoadError::Record {
            path: path.to_path_buf(),
            row,
            source,
        })?;

        let start_time = parse_timestamp(&raw.start_time).map_err(|source| LoadError::Timestamp {
            path: path.to_path_buf(),
            row,
            value: raw.start_time.clone(),
            source,
        })?;
        let end_time = non_empty(raw.end_time).and_then(|s| parse_timestamp(&s).ok());

        trips.push(TripRecord::new(
            row_no,
            city,
            start_time,
            end_time,
            raw.trip_duration,
            raw.start_station,
            raw.end_station,
            non_empty(raw.user_type),
            non_empty(raw.gender),
            raw.birth_year.map(|y| y.round() as i32),
        ));
    }

    Ok(TripDataset::new(city, trips))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{DayFilter, MonthFilter};
    use crate::data::model::{Day, Month};
    use std::path::PathBuf;

    fn read_trips_from_str(text: &str, city: City) -> Result<TripDataset, LoadError> {
        let reader = csv::Reader::from_reader(text.as_bytes());
        read_trips(reader, city, &PathBuf::from(city.file_name()))
    }

    const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1992.0
9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Subscriber,Male,1981.0
304487,2017-03-06 13:49:38,2017-03-06 13:55:28,350,Christiana Ave & Lawrence Ave,St. Louis Ave & Balmoral Ave,Subscriber,Male,1986.0
45207,2017-01-17 14:53:07,2017-01-17 15:02:03,534,Clark St & Randolph St,Desplaines St & Jackson Blvd,Customer,,
";

    const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
";

    #[test]
    fn parses_rows_and_derives_columns() {
        let ds = read_trips_from_str(CHICAGO, City::Chicago).unwrap();
        assert_eq!(ds.len(), 5);

        let first = &ds.trips[0];
        assert_eq!(first.row, 0);
        assert_eq!(first.month, 6);
        assert_eq!(first.day, Day::Friday);
        assert_eq!(first.hour, 15);
        assert_eq!(first.city, City::Chicago);
        assert_eq!(first.trip_duration, 321.0);
        assert_eq!(first.birth_year, Some(1992));
        assert_eq!(first.gender.as_deref(), Some("Male"));
        assert!(first.end_time.is_some());
    }

    #[test]
    fn blank_demographics_become_absent() {
        let ds = read_trips_from_str(CHICAGO, City::Chicago).unwrap();
        let last = &ds.trips[4];
        assert_eq!(last.gender, None);
        assert_eq!(last.birth_year, None);
        assert_eq!(last.user_type.as_deref(), Some("Customer"));
    }

    #[test]
    fn missing_demographic_columns_are_tolerated() {
        let ds = read_trips_from_str(WASHINGTON, City::Washington).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(ds.trips.iter().all(|t| t.gender.is_none() && t.birth_year.is_none()));
        assert!((ds.trips[0].trip_duration - 489.066).abs() < 1e-9);
    }

    #[test]
    fn malformed_timestamp_is_reported_with_row() {
        let text = "Start Time,Trip Duration,Start Station,End Station,User Type\n\
                    2017-01-01 00:07:57,100,A,B,Subscriber\n\
                    not-a-date,100,A,B,Subscriber\n";
        let err = read_trips_from_str(text, City::Washington).unwrap_err();
        match err {
            LoadError::Timestamp { row, value, .. } => {
                assert_eq!(row, 2);
                assert_eq!(value, "not-a-date");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_duration_is_a_record_error() {
        let text = "Start Time,Trip Duration,Start Station,End Station,User Type\n\
                    2017-01-01 00:07:57,long,A,B,Subscriber\n";
        let err = read_trips_from_str(text, City::Washington).unwrap_err();
        assert!(matches!(err, LoadError::Record { row: 1, .. }));
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_city(dir.path(), City::Chicago).unwrap_err();
        match err {
            LoadError::Open { path, .. } => assert!(path.ends_with("chicago.csv")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_data_reads_from_directory_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("chicago.csv"), CHICAGO).unwrap();

        let all = FilterSelection::new(City::Chicago, MonthFilter::All, DayFilter::All);
        let full = load_data(dir.path(), &all).unwrap();
        assert_eq!(full, load_city(dir.path(), City::Chicago).unwrap());

        let jan = FilterSelection::new(City::Chicago, MonthFilter::Only(Month::January), DayFilter::All);
        let ds = load_data(dir.path(), &jan).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(ds.trips.iter().all(|t| t.month == 1));

        let jan_tue = FilterSelection::new(
            City::Chicago,
            MonthFilter::Only(Month::January),
            DayFilter::Only(Day::Tuesday),
        );
        let ds = load_data(dir.path(), &jan_tue).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.trips[0].start_station, "Clark St & Randolph St");
    }
}
