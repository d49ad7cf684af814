//! Lazy row reader over the delimited quote file.
//!
//! The first line is a header and is always dropped. Blank lines are
//! skipped without consuming a row index; every other line gets the next
//! 1-based index, whether or not it parses.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Lines};
use std::path::Path;

use quotereel_common::error::{QuotereelError, QuotereelResult};

use crate::record::QuoteRecord;

/// A non-blank, non-header input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// The line split into quote and author.
    Record { index: usize, record: QuoteRecord },

    /// The line has no delimiter. `line` is the trimmed raw content.
    Malformed { index: usize, line: String },
}

impl Row {
    pub fn index(&self) -> usize {
        match self {
            Row::Record { index, .. } | Row::Malformed { index, .. } => *index,
        }
    }
}

/// Iterator of [`Row`]s read one line at a time.
pub struct RowSource<R> {
    lines: Lines<R>,
    delimiter: char,
    header_skipped: bool,
    last_index: usize,
    line_number: usize,
}

impl RowSource<BufReader<File>> {
    /// Open a quote file for reading.
    pub fn open(path: &Path, delimiter: char) -> QuotereelResult<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => QuotereelError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => QuotereelError::Io(e),
        })?;
        tracing::debug!(path = %path.display(), "Opened quote file");
        Ok(Self::new(BufReader::new(file), delimiter))
    }
}

impl<R: BufRead> RowSource<R> {
    pub fn new(reader: R, delimiter: char) -> Self {
        Self {
            lines: reader.lines(),
            delimiter,
            header_skipped: false,
            last_index: 0,
            line_number: 0,
        }
    }

    fn next_line(&mut self) -> Option<QuotereelResult<String>> {
        let line = self.lines.next()?;
        self.line_number += 1;
        Some(line.map_err(|e| {
            QuotereelError::input(format!("failed to read line {}: {e}", self.line_number))
        }))
    }
}

impl<R: BufRead> Iterator for RowSource<R> {
    type Item = QuotereelResult<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.header_skipped {
            self.header_skipped = true;
            if let Err(e) = self.next_line()? {
                return Some(Err(e));
            }
        }

        loop {
            let line = match self.next_line()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            if line.trim().is_empty() {
                continue;
            }

            self.last_index += 1;
            let index = self.last_index;
            let row = match QuoteRecord::parse(&line, self.delimiter) {
                Some(record) => Row::Record { index, record },
                None => Row::Malformed {
                    index,
                    line: line.trim().to_string(),
                },
            };
            return Some(Ok(row));
        }
    }
}
