use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};

// ---------------------------------------------------------------------------
// City – the three fixed data sources
// ---------------------------------------------------------------------------

/// A city with a bundled trip-record file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lower-case name as typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Backing CSV file, relative to the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Washington's export carries no gender or birth-year columns.
    pub fn has_demographics(self) -> bool {
        !matches!(self, City::Washington)
    }

    /// Case-insensitive lookup by name.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.name() == input)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Month / Day – calendar parts used for filtering
// ---------------------------------------------------------------------------

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August",
    "September", "October", "November", "December",
];

/// The six months covered by the data exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// 1-based position within the enumeration, equal to the calendar month.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.to_string().eq_ignore_ascii_case(input))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MONTH_NAMES[*self as usize])
    }
}

/// English name for a calendar month number, falling back to the number.
pub fn month_name(number: u32) -> String {
    number
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .map_or_else(|| number.to_string(), |name| (*name).to_string())
}

/// Day of the week, ordered Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Full day names only; abbreviations are rejected.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(input))
    }
}

impl From<chrono::Weekday> for Day {
    fn from(weekday: chrono::Weekday) -> Self {
        Day::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// TripRecord – one row of a city export
// ---------------------------------------------------------------------------

/// A single bicycle trip with its derived time-part columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Zero-based row position in the source file.
    pub row: usize,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    /// Seconds.
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    // -- derived at load --
    /// Calendar month, 1-based.
    pub month: u32,
    pub day: Day,
    pub hour: u32,
    pub city: City,
}

impl TripRecord {
    /// Build a record and derive month/day/hour from `start_time`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        row: usize,
        city: City,
        start_time: NaiveDateTime,
        end_time: Option<NaiveDateTime>,
        trip_duration: f64,
        start_station: String,
        end_station: String,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        Self {
            row,
            start_time,
            end_time,
            trip_duration,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
            month: start_time.month(),
            day: start_time.weekday().into(),
            hour: start_time.hour(),
            city,
        }
    }
}

// ---------------------------------------------------------------------------
// TripDataset – the loaded (and possibly filtered) table
// ---------------------------------------------------------------------------

/// All trips for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDataset {
    pub city: City,
    pub trips: Vec<TripRecord>,
}

impl TripDataset {
    pub fn new(city: City, trips: Vec<TripRecord>) -> Self {
        Self { city, trips }
    }

    /// Number of trips.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Contiguous slice starting at `offset`, clamped to the end of the data.
    pub fn page(&self, offset: usize, size: usize) -> &[TripRecord] {
        let start = offset.min(self.trips.len());
        let end = offset.saturating_add(size).min(self.trips.len());
        &self.trips[start..end]
    }
}
