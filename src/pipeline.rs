//! Line-oriented drivers around the parsing core.
//!
//! [`validate_dates`] and [`convert_dates`] are the two pipeline stages; both
//! pull candidates from a [`LineReader`] and write one line per accepted date.

use std::fs::File;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, info, trace, warn};

use crate::{
    FormatError, IntegerError, LongDate, MAX_LINE_LEN, ParsedDate, VALIDATE_ALL_DATES, parse_int,
};

/// Error type for the pipeline stages.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The converter was handed a date it cannot render.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The file to display could not be read.
    #[error("Cannot display {}: {source}", path.display())]
    Dump {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },
}

/// How many valid dates the validator should emit before stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLimit {
    /// Keep going until input runs out.
    Unbounded,
    /// Stop after this many dates (never zero).
    AtMost(u32),
}

/// Error type for the count argument.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LimitError {
    #[error("the program expects a non-negative integer argument: {0}")]
    Malformed(#[from] IntegerError),

    #[error("the program expects a non-negative integer argument, got {0}")]
    Negative(i32),
}

impl DateLimit {
    /// Returns true once `found` dates satisfy the limit
    pub const fn is_reached(self, found: usize) -> bool {
        match self {
            Self::Unbounded => false,
            Self::AtMost(max) => found >= max as usize,
        }
    }
}

impl TryFrom<i32> for DateLimit {
    type Error = LimitError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value == VALIDATE_ALL_DATES {
            return Ok(Self::Unbounded);
        }
        u32::try_from(value)
            .map(Self::AtMost)
            .map_err(|_| LimitError::Negative(value))
    }
}

impl FromStr for DateLimit {
    type Err = LimitError;

    /// Parses the count with the same overflow-checked parser used for dates.
    /// `0` means unbounded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(parse_int(s)?)
    }
}

/// Yields input lines without their line terminator, skipping any line of
/// [`MAX_LINE_LEN`] bytes or more.
///
/// The byte buffer is owned by the reader and cleared before every line.
/// Invalid UTF-8 is replaced lossily; such a line can never parse as a date.
pub struct LineReader<R> {
    reader: R,
    buf:    Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(MAX_LINE_LEN),
        }
    }

    /// Reads the next line that fits the length bound.
    ///
    /// Returns `Ok(None)` at end of input, which is distinct from an empty
    /// line (`Ok(Some(""))`).
    ///
    /// # Errors
    /// Propagates any error from the underlying reader.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        // one byte past the bound is enough to tell an overlong line apart
        let cap = MAX_LINE_LEN as u64 + 1;
        loop {
            self.buf.clear();
            if (&mut self.reader).take(cap).read_until(b'\n', &mut self.buf)? == 0 {
                return Ok(None);
            }
            if self.buf.last() == Some(&b'\n') {
                self.buf.pop();
                if self.buf.last() == Some(&b'\r') {
                    self.buf.pop();
                }
            } else if self.buf.len() > MAX_LINE_LEN {
                let skipped = self.reader.skip_until(b'\n')?;
                debug!(len = self.buf.len() + skipped, "discarding overlong line");
                continue;
            }
            if self.buf.len() >= MAX_LINE_LEN {
                debug!(len = self.buf.len(), "discarding overlong line");
                continue;
            }
            return Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()));
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

/// Copies valid dates from `input` to `output` until `limit` is reached or
/// input runs out. Accepted lines are written unchanged.
///
/// Invalid candidates are dropped. No more input is read once the limit has
/// been met.
///
/// # Errors
/// Returns `PipelineError::Io` if reading or writing fails.
pub fn validate_dates<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    limit: DateLimit,
) -> Result<usize, PipelineError> {
    let mut lines = LineReader::new(input);
    let mut found = 0;

    while !limit.is_reached(found) {
        let Some(line) = lines.next_line()? else {
            break;
        };
        match line.parse::<ParsedDate>().and_then(|date| date.validate()) {
            Ok(()) => {
                trace!(candidate = %line, "accepted");
                writeln!(output, "{line}")?;
                found += 1;
            },
            Err(e) if e.is_structural() => {
                debug!(candidate = %line, reason = %e, "rejected malformed candidate");
            },
            Err(e) => debug!(candidate = %line, reason = %e, "rejected impossible date"),
        }
    }

    info!(found, ?limit, "validation finished");
    Ok(found)
}

/// Rewrites each whitespace-separated `MM/DD/YYYY` token of `input` as
/// `DD MON YYYY`, one per output line.
///
/// Input is expected to come from [`validate_dates`], so days are not
/// re-checked. Tokens that do not split into three numeric fields are dropped
/// with a warning.
///
/// # Errors
/// - `PipelineError::Format` if a month is outside 1-12. This is fatal: it
///   means the input was never validated.
/// - `PipelineError::Io` if reading or writing fails.
pub fn convert_dates<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
) -> Result<usize, PipelineError> {
    let mut converted = 0;

    for line in LineReader::new(input) {
        let line = line?;
        for candidate in line.split_whitespace() {
            let date = match candidate.parse::<ParsedDate>() {
                Ok(date) => date,
                Err(e) => {
                    warn!(candidate, reason = %e, "skipping unparsable token");
                    continue;
                },
            };
            writeln!(output, "{}", LongDate::try_from(&date)?)?;
            converted += 1;
        }
    }

    info!(converted, "conversion finished");
    Ok(converted)
}

/// Writes a blank line followed by the contents of `path`, byte for byte.
///
/// # Errors
/// Returns `PipelineError::Dump` if the file cannot be opened or read, and
/// `PipelineError::Io` if writing fails.
pub fn dump_file<W: Write>(path: &Path, output: &mut W) -> Result<u64, PipelineError> {
    let dump_err = |source| PipelineError::Dump {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(dump_err)?;
    writeln!(output)?;
    // read and write failures are indistinguishable through io::copy
    let copied = io::copy(&mut file, output).map_err(dump_err)?;
    debug!(path = %path.display(), bytes = copied, "displayed file");
    Ok(copied)
}
