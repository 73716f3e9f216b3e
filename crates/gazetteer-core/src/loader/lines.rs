// crates/gazetteer-core/src/loader/lines.rs

//! # Line Source
//!
//! Streams a delimited text file into records, one at a time. Single-byte
//! delimiters (the tab-separated GeoNames dumps) go through `csv` with
//! quoting off and `#` comment lines skipped; a regular-expression delimiter
//! splits each line itself. Nothing is buffered beyond the current record,
//! so memory stays flat no matter how large the dump is.
//!
//! Each [`Row`] deserializes into a serde row struct on its own, which makes
//! the record the unit of failure: one bad row never ends the scan.

use super::common_io;
use crate::error::{GazetteerError, Result};
use csv::{ByteRecord, ReaderBuilder, StringRecord};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// Lines starting with this are comments (`countryInfo.txt` has a long header).
pub const COMMENT_MARKER: char = '#';

/// How a line is split into fields.
#[derive(Debug, Clone)]
pub enum Delimiter {
    Byte(u8),
    Pattern(Regex),
}

impl Delimiter {
    /// The GeoNames dumps are tab separated.
    pub const TAB: Delimiter = Delimiter::Byte(b'\t');

    pub fn pattern(re: &str) -> Result<Self> {
        Ok(Delimiter::Pattern(Regex::new(re)?))
    }
}

/// One record of a dump. Fields are trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// 1-based line number in the source file.
    pub line: usize,
    pub record: StringRecord,
}

impl Row {
    pub fn new<I, T>(line: usize, fields: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut record: StringRecord = fields.into_iter().collect();
        record.trim();
        Row { line, record }
    }

    /// First field, or `""` for an empty record.
    pub fn first(&self) -> &str {
        self.record.get(0).unwrap_or("")
    }

    /// Positional deserialization into a row struct. Empty fields become
    /// `None` for `Option` columns.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        self.record
            .deserialize(None)
            .map_err(|err| GazetteerError::row(self.line, describe(&err)))
    }
}

fn describe(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => err.to_string(),
    }
}

enum Source<R> {
    Delimited(csv::Reader<R>),
    Pattern {
        reader: R,
        pattern: Regex,
        line: usize,
        buf: Vec<u8>,
    },
}

/// Lazy, single-pass iterator over the rows of a reader.
///
/// `\n` and `\r\n` each terminate one row; empty and comment lines yield
/// nothing. Invalid UTF-8 is replaced rather than failing the scan. After an
/// I/O error the iterator is fused.
pub struct RowReader<R> {
    source: Source<R>,
    path: PathBuf,
    done: bool,
}

impl RowReader<Box<dyn BufRead>> {
    pub fn open(path: impl AsRef<Path>, delimiter: Delimiter) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        Ok(Self::with_path(reader, delimiter, path))
    }
}

impl<R: BufRead> RowReader<R> {
    pub fn new(reader: R, delimiter: Delimiter) -> Self {
        Self::with_path(reader, delimiter, Path::new("<reader>"))
    }

    fn with_path(reader: R, delimiter: Delimiter, path: &Path) -> Self {
        let source = match delimiter {
            Delimiter::Byte(byte) => Source::Delimited(
                ReaderBuilder::new()
                    .delimiter(byte)
                    .has_headers(false)
                    .flexible(true)
                    .quoting(false)
                    .comment(Some(COMMENT_MARKER as u8))
                    .from_reader(reader),
            ),
            Delimiter::Pattern(pattern) => Source::Pattern {
                reader,
                pattern,
                line: 0,
                buf: Vec::with_capacity(256),
            },
        };
        RowReader {
            source,
            path: path.to_path_buf(),
            done: false,
        }
    }
}

fn next_delimited<R: io::Read>(reader: &mut csv::Reader<R>) -> io::Result<Option<Row>> {
    let mut raw = ByteRecord::new();
    if !reader.read_byte_record(&mut raw)? {
        return Ok(None);
    }
    let line = raw.position().map_or(0, |p| p.line() as usize);
    let mut record = StringRecord::from_byte_record_lossy(raw);
    record.trim();
    Ok(Some(Row { line, record }))
}

fn next_split<R: BufRead>(
    reader: &mut R,
    pattern: &Regex,
    line: &mut usize,
    buf: &mut Vec<u8>,
) -> io::Result<Option<Row>> {
    loop {
        buf.clear();
        if reader.read_until(b'\n', buf)? == 0 {
            return Ok(None);
        }
        *line += 1;
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        let text = String::from_utf8_lossy(buf);
        if text.is_empty() || text.starts_with(COMMENT_MARKER) {
            continue;
        }
        return Ok(Some(Row::new(*line, pattern.split(&text))));
    }
}

impl<R: BufRead> Iterator for RowReader<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let next = match &mut self.source {
            Source::Delimited(reader) => next_delimited(reader),
            Source::Pattern {
                reader,
                pattern,
                line,
                buf,
            } => next_split(reader, pattern, line, buf),
        };
        match next {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(source) => {
                self.done = true;
                Some(Err(GazetteerError::Io {
                    path: self.path.clone(),
                    source,
                }))
            }
        }
    }
}

/// Outcome of a [`scan_rows`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Rows delivered to the processor.
    pub rows: usize,
    /// Rows whose processor returned an error.
    pub failed: usize,
}

/// Feeds every row of `path` to `process`, in file order.
///
/// An error returned by `process` is logged and counted, and the scan moves
/// on to the next row. Only an unreadable file or a failing read aborts.
pub fn scan_rows<F>(path: impl AsRef<Path>, delimiter: Delimiter, mut process: F) -> Result<ScanReport>
where
    F: FnMut(Row) -> Result<()>,
{
    let path = path.as_ref();
    let mut report = ScanReport::default();
    for row in RowReader::open(path, delimiter)? {
        report.rows += 1;
        if let Err(err) = process(row?) {
            report.failed += 1;
            log::warn!("{}: {err}", path.display());
        }
    }
    Ok(report)
}
