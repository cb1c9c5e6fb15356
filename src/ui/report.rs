use std::io::{self, Write};
use std::time::Duration;

use crate::data::filter::{DayFilter, FilterSelection, MonthFilter};
use crate::data::model::month_name;
use crate::stats::frequency::ValueCounts;
use crate::stats::time::format_hour;
use crate::stats::{DurationStats, StationStats, TimeStats, UserStats};

// ---------------------------------------------------------------------------
// Console rendering of the four statistics sections
// ---------------------------------------------------------------------------

pub const NO_DATA: &str = "no data available";

pub fn separator<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(40))
}

pub fn section_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "\n{title}\n")
}

pub fn section_footer<W: Write>(out: &mut W, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    separator(out)
}

fn or_no_data(value: Option<String>) -> String {
    value.unwrap_or_else(|| NO_DATA.to_string())
}

pub fn write_time_stats<W: Write>(out: &mut W, stats: &TimeStats, selection: &FilterSelection) -> io::Result<()> {
    match selection.month {
        MonthFilter::All => writeln!(
            out,
            "The most common month is {}",
            or_no_data(stats.most_common_month.map(month_name))
        )?,
        MonthFilter::Only(m) => writeln!(
            out,
            "We cannot display the most common month since your input was a single month, namely {m}"
        )?,
    }

    match selection.day {
        DayFilter::All => writeln!(
            out,
            "The most common day is {}",
            or_no_data(stats.most_common_day.map(|d| d.to_string()))
        )?,
        DayFilter::Only(d) => writeln!(
            out,
            "We cannot display the most common day since your input was a single day, namely {d}"
        )?,
    }

    writeln!(
        out,
        "The most common start hour is {}",
        or_no_data(stats.most_common_hour.map(format_hour))
    )
}

pub fn write_station_stats<W: Write>(out: &mut W, stats: &StationStats) -> io::Result<()> {
    writeln!(
        out,
        "The most commonly used start station is {}",
        or_no_data(stats.start_station.as_ref().map(|r| format!("{} ({} trips)", r.value, r.count)))
    )?;
    writeln!(
        out,
        "The most commonly used end station is {}",
        or_no_data(stats.end_station.as_ref().map(|r| format!("{} ({} trips)", r.value, r.count)))
    )?;
    writeln!(
        out,
        "The most frequent trip is {}",
        or_no_data(
            stats
                .trip
                .as_ref()
                .map(|r| format!("from {} to {} ({} trips)", r.value.0, r.value.1, r.count))
        )
    )
}

pub fn write_duration_stats<W: Write>(out: &mut W, stats: &DurationStats) -> io::Result<()> {
    writeln!(out, "Total travel time : {} seconds", stats.total)?;
    match stats.mean() {
        Some(mean) => writeln!(out, "Mean travel time : {mean} seconds"),
        None => writeln!(out, "Mean travel time : {NO_DATA}"),
    }
}

fn write_counts<W: Write>(out: &mut W, counts: &ValueCounts<String>) -> io::Result<()> {
    if counts.is_empty() {
        writeln!(out, "  - {NO_DATA}")?;
    }
    for (value, n) in counts.iter() {
        writeln!(out, "  - {value}: {n}")?;
    }
    writeln!(out)
}

pub fn write_user_stats<W: Write>(out: &mut W, stats: &UserStats) -> io::Result<()> {
    writeln!(out, "Here is a list and count of user types:\n")?;
    write_counts(out, &stats.user_types)?;

    let Some(demo) = &stats.demographics else {
        return writeln!(
            out,
            "Sorry, we have to skip gender and birth statistics, as these values are not included in the data set"
        );
    };

    writeln!(out, "Here is a list and count of gender:\n")?;
    write_counts(out, &demo.genders)?;

    writeln!(out, "Now to some statistics on birth date:\n")?;
    let year = |y: Option<i32>| or_no_data(y.map(|y| y.to_string()));
    writeln!(out, "  - earliest birth year: {}", year(demo.earliest_birth_year))?;
    writeln!(out, "  - most common birth year: {}", year(demo.most_common_birth_year))?;
    writeln!(out, "  - most recent birth year: {}", year(demo.most_recent_birth_year))
}
