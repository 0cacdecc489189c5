//! Streaming manifest file reader.
//!
//! A manifest holds one record per line; each record is a comma-separated
//! list of `"start-end"` page-range tokens.

use crate::classify::ClassifiedLine;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// Fatal errors for manifest processing.
///
/// Token-level format failures are not represented here; they are data
/// (the invalid bucket), handled entirely inside classification.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid manifest usage: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, ManifestError>;

/// A streaming manifest reader yielding one classified line per record.
///
/// Unlike a typical record reader, blank lines are not skipped: an empty
/// line is a record with two empty buckets, so the output artifacts stay
/// line-aligned with the input.
pub struct ManifestReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: String,
}

impl ManifestReader<File> {
    /// Open a manifest file from a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> ManifestReader<R> {
    /// Create a manifest reader from any readable source.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: String::with_capacity(256),
        }
    }

    /// Line number of the most recently read record (1-based).
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read and classify the next record. Returns `None` at end of input.
    pub fn read_record(&mut self) -> Result<Option<ClassifiedLine>> {
        self.buffer.clear();
        let bytes_read = self.reader.read_line(&mut self.buffer)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let line = self.buffer.trim_end_matches(['\n', '\r']);
        Ok(Some(ClassifiedLine::classify(line)))
    }

    /// Get an iterator over all records.
    pub fn records(self) -> ManifestRecordIter<R> {
        ManifestRecordIter { reader: self }
    }
}

/// Iterator over classified manifest records.
pub struct ManifestRecordIter<R: Read> {
    reader: ManifestReader<R>,
}

impl<R: Read> Iterator for ManifestRecordIter<R> {
    type Item = Result<ClassifiedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Classify all records from a manifest file.
pub fn read_classified<P: AsRef<Path>>(path: P) -> Result<Vec<ClassifiedLine>> {
    let reader = ManifestReader::from_path(path)?;
    reader.records().collect()
}

/// Classify records from a string (useful for testing).
pub fn parse_manifest(content: &str) -> Result<Vec<ClassifiedLine>> {
    let reader = ManifestReader::new(content.as_bytes());
    reader.records().collect()
}
