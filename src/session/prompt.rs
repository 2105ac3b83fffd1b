//! Line-oriented prompting with numeric parse-retry loops.
//!
//! Parsing a number is a single attempt that returns a [`ParseError`]; the
//! retry policy lives in the prompt loops, which re-issue the same prompt
//! text until a syntactically valid value arrives. EOF is signalled as
//! `Ok(None)` so the session can wind down instead of spinning.

use std::io::{self, BufRead, Write};
use thiserror::Error;

/// A single failed numeric parse.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    /// Input was not a valid integer.
    #[error("'{0}' is not a whole number")]
    Integer(String),

    /// Input was not a valid number.
    #[error("'{0}' is not a number")]
    Float(String),
}

/// Reads one line, stripping the trailing newline. `None` on EOF.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}

/// Parses a line as an integer.
pub fn parse_i64(line: &str) -> Result<i64, ParseError> {
    let trimmed = line.trim();
    trimmed.parse().map_err(|_| ParseError::Integer(trimmed.to_string()))
}

/// Parses a line as a floating-point number.
pub fn parse_f64(line: &str) -> Result<f64, ParseError> {
    let trimmed = line.trim();
    trimmed.parse().map_err(|_| ParseError::Float(trimmed.to_string()))
}

/// Prompts for a free-form line. `None` on EOF.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    read_line(input)
}

/// Prompts until a syntactically valid integer arrives. `None` on EOF.
pub fn prompt_i64<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<i64>> {
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse_i64(&line) {
            Ok(n) => return Ok(Some(n)),
            Err(_) => writeln!(output, "Invalid input. Enter a whole number.")?,
        }
    }
}

/// Prompts until a syntactically valid number arrives. `None` on EOF.
pub fn prompt_f64<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<f64>> {
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse_f64(&line) {
            Ok(n) => return Ok(Some(n)),
            Err(_) => writeln!(output, "Invalid input. Enter a number.")?,
        }
    }
}
