use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::num::{ParseFloatError, ParseIntError};
use std::path::Path;

use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: expected `<label> <duration>`, found {text:?}")]
    MissingDuration { line: usize, text: String },

    #[error("line {line}: duration {token:?} has no `m` separator")]
    MissingMinutes { line: usize, token: String },

    #[error("line {line}: invalid minutes in duration {token:?}")]
    InvalidMinutes {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: invalid seconds in duration {token:?}")]
    InvalidSeconds {
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("failed to read timing records")]
    Io(#[from] io::Error),
}

/// One of the sequences collected from a timing file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Series {
    Real,
    User,
    Sys,
    UserPlusSys,
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Series::Real => "real",
            Series::User => "user",
            Series::Sys => "sys",
            Series::UserPlusSys => "user+sys",
        };
        f.write_str(name)
    }
}

/// Durations in seconds, in file order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedSeries {
    real: Vec<Seconds>,
    user: Vec<Seconds>,
    sys: Vec<Seconds>,
    user_plus_sys: Vec<Seconds>,
}

impl ParsedSeries {
    pub fn new() -> Self {
        ParsedSeries::default()
    }

    pub fn real_time(&self) -> &[Seconds] {
        &self.real
    }

    pub fn user_time(&self) -> &[Seconds] {
        &self.user
    }

    pub fn sys_time(&self) -> &[Seconds] {
        &self.sys
    }

    pub fn user_plus_sys_time(&self) -> &[Seconds] {
        &self.user_plus_sys
    }

    pub fn series(&self, which: Series) -> &[Seconds] {
        match which {
            Series::Real => self.real_time(),
            Series::User => self.user_time(),
            Series::Sys => self.sys_time(),
            Series::UserPlusSys => self.user_plus_sys_time(),
        }
    }
}

pub type Seconds = f64;

/// Parses the timing file at `filename`. Lines with an unknown label are
/// echoed to `echo`.
pub fn parse_file(filename: &Path, echo: &mut dyn Write) -> Result<ParsedSeries, ParseError> {
    let file = File::open(filename)?;
    let reader = io::BufReader::new(file);
    parse_reader(reader, echo)
}

pub fn parse_reader<R: BufRead>(
    reader: R,
    echo: &mut dyn Write,
) -> Result<ParsedSeries, ParseError> {
    let mut series = ParsedSeries::new();
    // user time of the current group, consumed by the following sys line
    let mut pending_user: Seconds = 0.0;
    let mut user_seen = false;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let (label, seconds) = parse_line(&line, line_no)?;
        match label {
            "real" => series.real.push(seconds),
            "user" => {
                pending_user = seconds;
                user_seen = true;
                series.user.push(seconds);
            }
            "sys" => {
                if !user_seen {
                    debug!(
                        "line {}: sys without a preceding user line, using {}",
                        line_no, pending_user
                    );
                }
                user_seen = false;
                series.sys.push(seconds);
                series.user_plus_sys.push(pending_user + seconds);
            }
            _ => writeln!(echo, "{}", line)?,
        }
    }

    debug!(
        "parsed {} real, {} user, {} sys records",
        series.real.len(),
        series.user.len(),
        series.sys.len()
    );
    Ok(series)
}

fn parse_line(line: &str, line_no: usize) -> Result<(&str, Seconds), ParseError> {
    let mut fields = line.split_whitespace();
    let (label, token) = match (fields.next(), fields.next()) {
        (Some(label), Some(token)) => (label, token),
        _ => {
            return Err(ParseError::MissingDuration {
                line: line_no,
                text: line.to_owned(),
            })
        }
    };
    Ok((label, parse_duration(token, line_no)?))
}

// `<minutes>m<seconds>s`, e.g. `1m2.345s`
fn parse_duration(token: &str, line_no: usize) -> Result<Seconds, ParseError> {
    let (minutes, seconds) = token.split_once('m').ok_or_else(|| ParseError::MissingMinutes {
        line: line_no,
        token: token.to_owned(),
    })?;

    let minutes: i64 = minutes.parse().map_err(|source| ParseError::InvalidMinutes {
        line: line_no,
        token: token.to_owned(),
        source,
    })?;
    let seconds: f64 = seconds
        .trim_end_matches('s')
        .parse()
        .map_err(|source| ParseError::InvalidSeconds {
            line: line_no,
            token: token.to_owned(),
            source,
        })?;

    Ok(minutes as f64 * 60.0 + seconds)
}
