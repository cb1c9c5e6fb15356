use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use crate::data::filter::{DayFilter, FilterSelection, MonthFilter};
use crate::data::loader::load_data;
use crate::data::model::{City, TripDataset};
use crate::state::{Answer, BrowserState, BrowserStep, RawDataBrowser, DEFAULT_PAGE_SIZE};
use crate::stats::{duration_stats, station_stats, time_stats, user_stats};
use crate::ui::prompt::{self, Choice};
use crate::ui::{report, table};

// ---------------------------------------------------------------------------
// Session controller: prompts → load → reports → browser → restart
// ---------------------------------------------------------------------------

/// Where the city files live and how many rows a browser page shows.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub data_dir: PathBuf,
    pub page_size: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One interactive run over a console-like reader / writer pair.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Loop until the user exits at a filter prompt or declines a restart.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(selection) = self.read_filters()? else {
                writeln!(self.output, "Farewell!\n")?;
                return Ok(());
            };
            log::debug!("analysing {selection}");
            self.analyze(&selection)?;

            let answer = prompt::ask_answer(
                &mut self.input,
                &mut self.output,
                "\nWould you like to restart? Enter yes or no.",
            )?;
            if answer != Answer::Yes {
                return Ok(());
            }
        }
    }

    /// Ask for city, month and day. `None` means the user chose to exit.
    fn read_filters(&mut self) -> Result<Option<FilterSelection>> {
        writeln!(self.output, "\nStarting up bikeshare terminal...")?;
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!\n")?;

        let Choice::Selected(city) = prompt::choose(
            &mut self.input,
            &mut self.output,
            prompt::CITY_MENU,
            "You entered an invalid city. Please try again.",
            City::parse,
        )?
        else {
            return Ok(None);
        };

        writeln!(self.output)?;
        let Choice::Selected(month) = prompt::choose(
            &mut self.input,
            &mut self.output,
            prompt::MONTH_MENU,
            "You did a wrong selection. Please try again.",
            MonthFilter::parse,
        )?
        else {
            return Ok(None);
        };

        writeln!(self.output)?;
        let Choice::Selected(day) = prompt::choose(
            &mut self.input,
            &mut self.output,
            prompt::DAY_MENU,
            "You did a wrong selection. Please try again.",
            DayFilter::parse,
        )?
        else {
            return Ok(None);
        };

        report::separator(&mut self.output)?;
        Ok(Some(FilterSelection::new(city, month, day)))
    }

    /// Load, report and browse. Load failures end this analysis only.
    fn analyze(&mut self, selection: &FilterSelection) -> Result<()> {
        let dataset = match load_data(&self.config.data_dir, selection) {
            Ok(ds) => ds,
            Err(e) => {
                let e = anyhow::Error::new(e);
                log::error!("load failed: {e:#}");
                writeln!(self.output, "\nCould not load data for {}: {e:#}", selection.city)?;
                return Ok(());
            }
        };

        if dataset.is_empty() {
            writeln!(self.output, "\nNo trips match {selection}.")?;
        }
        self.print_stats(&dataset, selection)?;
        self.browse(&dataset)
    }

    fn print_stats(&mut self, dataset: &TripDataset, selection: &FilterSelection) -> Result<()> {
        let out = &mut self.output;
        let trips = dataset.trips.as_slice();

        report::section_header(out, "Calculating The Most Frequent Times of Travel...")?;
        let started = Instant::now();
        report::write_time_stats(out, &time_stats(trips), selection)?;
        report::section_footer(out, started.elapsed())?;

        report::section_header(out, "Calculating The Most Popular Stations and Trip...")?;
        let started = Instant::now();
        report::write_station_stats(out, &station_stats(trips))?;
        report::section_footer(out, started.elapsed())?;

        report::section_header(out, "Calculating Trip Duration...")?;
        let started = Instant::now();
        report::write_duration_stats(out, &duration_stats(trips))?;
        report::section_footer(out, started.elapsed())?;

        report::section_header(out, "Calculating User Stats...")?;
        let started = Instant::now();
        report::write_user_stats(out, &user_stats(dataset))?;
        report::section_footer(out, started.elapsed())?;
        Ok(())
    }

    /// Raw data browser over the filtered dataset.
    fn browse(&mut self, dataset: &TripDataset) -> Result<()> {
        writeln!(
            self.output,
            "\nWelcome to the bikeshare raw data browser. Do you want to view the raw data?"
        )?;
        let mut browser = RawDataBrowser::new(dataset.len(), self.config.page_size);

        loop {
            let paging = browser.state() == BrowserState::Paging;
            if paging {
                writeln!(self.output, "Do you wish to see more raw data? ")?;
            }
            let answer = prompt::ask_answer(&mut self.input, &mut self.output, "Please enter 'Yes' or 'No':")?;

            match browser.handle(answer) {
                BrowserStep::Page { rows, exhausted } => {
                    log::debug!("showing rows {rows:?} of {}", dataset.len());
                    let page = dataset.page(rows.start, rows.len());
                    if page.is_empty() {
                        writeln!(self.output, "No rows to display.")?;
                    } else {
                        writeln!(self.output, "{}", table::render_page(page, dataset.city)?)?;
                    }
                    if exhausted {
                        writeln!(self.output, "End of data file reached. Exiting browser...\n")?;
                        return Ok(());
                    }
                }
                BrowserStep::Reprompt => {
                    writeln!(self.output, "Your input was not recognized. Please try again")?;
                }
                BrowserStep::Closed => {
                    if paging {
                        writeln!(self.output, "Exiting browser...")?;
                    }
                    return Ok(());
                }
                BrowserStep::EndOfData => {
                    writeln!(self.output, "End of data file reached. Exiting browser...\n")?;
                    return Ok(());
                }
            }
        }
    }
}
