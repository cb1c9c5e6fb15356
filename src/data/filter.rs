use std::fmt;

use super::model::{City, Day, Month, TripDataset, TripRecord};

// ---------------------------------------------------------------------------
// Filter selection: the city plus optional month / day constraints
// ---------------------------------------------------------------------------

/// Month constraint chosen at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    /// Accepts a month name or `all`, case-insensitively.
    pub fn parse(input: &str) -> Option<Self> {
        if input.trim().eq_ignore_ascii_case("all") {
            return Some(MonthFilter::All);
        }
        Month::parse(input).map(MonthFilter::Only)
    }
}

/// Day-of-week constraint chosen at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Day),
}

impl DayFilter {
    /// Accepts a day name or `all`, case-insensitively.
    pub fn parse(input: &str) -> Option<Self> {
        if input.trim().eq_ignore_ascii_case("all") {
            return Some(DayFilter::All);
        }
        Day::parse(input).map(DayFilter::Only)
    }
}

/// What the user asked to analyse. Immutable once read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// Whether a single trip passes the month and day constraints.
    pub fn matches(&self, trip: &TripRecord) -> bool {
        let month_ok = match self.month {
            MonthFilter::All => true,
            MonthFilter::Only(m) => trip.month == m.number(),
        };
        let day_ok = match self.day {
            DayFilter::All => true,
            DayFilter::Only(d) => trip.day == d,
        };
        month_ok && day_ok
    }

    /// Retain only matching trips. Row order is preserved.
    pub fn apply(&self, mut dataset: TripDataset) -> TripDataset {
        dataset.trips.retain(|t| self.matches(t));
        dataset
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.city)?;
        match self.month {
            MonthFilter::All => write!(f, ", all months")?,
            MonthFilter::Only(m) => write!(f, ", {m}")?,
        }
        match self.day {
            DayFilter::All => write!(f, ", all days"),
            DayFilter::Only(d) => write!(f, ", {d}s"),
        }
    }
}
