use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::state::Answer;

// ---------------------------------------------------------------------------
// Line-oriented prompts over any reader / writer pair
// ---------------------------------------------------------------------------

pub const PROMPT_MARKER: &str = "[bikeshare]:~$ ";

/// Typed at a filter prompt to leave the program.
pub const EXIT_SENTINEL: &str = "x";

pub const CITY_MENU: &str = "Please enter one of the following city names or 'X' to exit:\n\
1) Chicago\n2) New York City\n3) Washington";

pub const MONTH_MENU: &str = "Please enter the month you want to explore the data, 'ALL' for all months or 'X' to exit:\n\
1) January\n2) February\n3) March\n4) April\n5) May\n6) June\n7) ALL";

pub const DAY_MENU: &str = "Please enter the day you want to explore, 'ALL' for all days or 'X' to exit:\n\
1) Monday\n2) Tuesday\n3) Wednesday\n4) Thursday\n5) Friday\n6) Saturday\n7) Sunday\n8) ALL";

/// Outcome of a filter prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    Selected(T),
    Exit,
}

/// Read one line without its terminator. `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let n = input.read_line(&mut line).context("reading from stdin")?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Show `menu` until `parse` accepts the answer or the user exits.
///
/// End of input is treated like the exit sentinel.
pub fn choose<R, W, T>(
    input: &mut R,
    output: &mut W,
    menu: &str,
    invalid: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Choice<T>>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{menu}\n{PROMPT_MARKER}")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            log::warn!("input closed at prompt, exiting");
            return Ok(Choice::Exit);
        };
        let answer = line.trim();
        if answer.eq_ignore_ascii_case(EXIT_SENTINEL) {
            return Ok(Choice::Exit);
        }
        match parse(answer) {
            Some(value) => return Ok(Choice::Selected(value)),
            None => writeln!(output, "{invalid}")?,
        }
    }
}

/// Ask for a yes/no answer once. End of input counts as "no".
pub fn ask_answer<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<Answer> {
    write!(output, "{question}\n{PROMPT_MARKER}")?;
    output.flush()?;
    Ok(read_line(input)?.map_or(Answer::No, |line| Answer::parse(&line)))
}
