use std::ops::Range;

// ---------------------------------------------------------------------------
// Raw data browser state, independent of console I/O
// ---------------------------------------------------------------------------

/// Rows shown per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// A yes/no answer as typed at the browser prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Unrecognized,
}

impl Answer {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "yes" => Answer::Yes,
            "no" => Answer::No,
            _ => Answer::Unrecognized,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserState {
    AwaitingFirstAnswer,
    Paging,
    Done,
}

/// What the console layer should do after an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserStep {
    /// Print these row positions. `exhausted` means the data ran out and the
    /// browser has already moved to `Done`.
    Page { rows: Range<usize>, exhausted: bool },
    /// Input was not yes/no; ask again.
    Reprompt,
    /// The user declined.
    Closed,
    /// No rows left to show, including a dataset that was empty from the start.
    EndOfData,
}

/// Pages through `total_rows` rows in fixed-size steps.
#[derive(Debug, Clone)]
pub struct RawDataBrowser {
    state: BrowserState,
    offset: usize,
    page_size: usize,
    total_rows: usize,
}

impl RawDataBrowser {
    pub fn new(total_rows: usize, page_size: usize) -> Self {
        Self {
            state: BrowserState::AwaitingFirstAnswer,
            offset: 0,
            page_size: page_size.max(1),
            total_rows,
        }
    }

    pub fn state(&self) -> BrowserState {
        self.state
    }

    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.total_rows
    }

    /// Advance the state machine by one answer.
    pub fn handle(&mut self, answer: Answer) -> BrowserStep {
        match (self.state, answer) {
            (BrowserState::Done, _) if self.is_exhausted() => BrowserStep::EndOfData,
            (BrowserState::Done, _) => BrowserStep::Closed,
            (_, Answer::Yes) => self.next_page(),
            (_, Answer::No) => {
                self.state = BrowserState::Done;
                if self.is_exhausted() {
                    BrowserStep::EndOfData
                } else {
                    BrowserStep::Closed
                }
            }
            (_, Answer::Unrecognized) => BrowserStep::Reprompt,
        }
    }

    fn next_page(&mut self) -> BrowserStep {
        let start = self.offset.min(self.total_rows);
        let end = self.offset.saturating_add(self.page_size).min(self.total_rows);
        self.offset = self.offset.saturating_add(self.page_size);

        let exhausted = self.is_exhausted();
        self.state = if exhausted {
            BrowserState::Done
        } else {
            BrowserState::Paging
        };
        BrowserStep::Page {
            rows: start..end,
            exhausted,
        }
    }
}
