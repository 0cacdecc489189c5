//! Partition command implementation.
//!
//! Streams a manifest file record by record and splits each record's
//! tokens into the valid and invalid artifacts, one line per record.

use crate::manifest::{ManifestReader, Result};
use std::fmt;
use std::io::{Read, Write};
use std::path::Path;

/// Statistics from a partition run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionStats {
    /// Records read from the manifest.
    pub lines: usize,
    /// Tokens that parsed as page ranges.
    pub valid: usize,
    /// Tokens that failed validation.
    pub invalid: usize,
}

impl fmt::Display for PartitionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lines: {}, valid tokens: {}, invalid tokens: {}",
            self.lines, self.valid, self.invalid
        )
    }
}

/// Partition command configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartitionCommand;

impl PartitionCommand {
    pub fn new() -> Self {
        Self
    }

    /// Partition a manifest file into the given valid/invalid sinks.
    pub fn run<P, W1, W2>(
        &self,
        input: P,
        valid_out: &mut W1,
        invalid_out: &mut W2,
    ) -> Result<PartitionStats>
    where
        P: AsRef<Path>,
        W1: Write,
        W2: Write,
    {
        let reader = ManifestReader::from_path(input)?;
        self.partition(reader, valid_out, invalid_out)
    }

    /// Partition records from any readable source.
    ///
    /// Every record emits exactly one line into each sink, empty records
    /// included, so both artifacts stay line-aligned with the input.
    pub fn partition<R, W1, W2>(
        &self,
        reader: ManifestReader<R>,
        valid_out: &mut W1,
        invalid_out: &mut W2,
    ) -> Result<PartitionStats>
    where
        R: Read,
        W1: Write,
        W2: Write,
    {
        let mut stats = PartitionStats::default();

        for record in reader.records() {
            let record = record?;
            writeln!(valid_out, "{}", record.valid_line())?;
            writeln!(invalid_out, "{}", record.invalid_line())?;

            stats.lines += 1;
            stats.valid += record.valid.len();
            stats.invalid += record.invalid.len();
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partition_str(content: &str) -> (PartitionStats, String, String) {
        let cmd = PartitionCommand::new();
        let mut valid = Vec::new();
        let mut invalid = Vec::new();
        let stats = cmd
            .partition(
                ManifestReader::new(content.as_bytes()),
                &mut valid,
                &mut invalid,
            )
            .unwrap();
        (
            stats,
            String::from_utf8(valid).unwrap(),
            String::from_utf8(invalid).unwrap(),
        )
    }

    #[test]
    fn test_partition_mixed_record() {
        let (stats, valid, invalid) = partition_str("10-15, 12-18, abc-def\n");

        assert_eq!(valid, "10-15,12-18\n");
        assert_eq!(invalid, "abc-def\n");
        assert_eq!(
            stats,
            PartitionStats {
                lines: 1,
                valid: 2,
                invalid: 1
            }
        );
    }

    #[test]
    fn test_partition_keeps_line_alignment() {
        let (stats, valid, invalid) = partition_str("10-15\n\nbad, 3-4\n");

        assert_eq!(valid, "10-15\n\n3-4\n");
        assert_eq!(invalid, "\n\nbad\n");
        assert_eq!(stats.lines, 3);
    }

    #[test]
    fn test_partition_empty_input() {
        let (stats, valid, invalid) = partition_str("");

        assert_eq!(stats, PartitionStats::default());
        assert!(valid.is_empty());
        assert!(invalid.is_empty());
    }

    #[test]
    fn test_partition_counts_tokens() {
        let (stats, _, _) = partition_str("1-2, 3-4\n5-1, x\n6-6\n");

        assert_eq!(stats.valid, 3);
        assert_eq!(stats.invalid, 2);
    }

    #[test]
    fn test_stats_display() {
        let stats = PartitionStats {
            lines: 3,
            valid: 2,
            invalid: 1,
        };
        assert_eq!(
            stats.to_string(),
            "lines: 3, valid tokens: 2, invalid tokens: 1"
        );
    }

    #[test]
    fn test_missing_input_fails() {
        let cmd = PartitionCommand::new();
        let mut valid = Vec::new();
        let mut invalid = Vec::new();
        assert!(cmd
            .run("no/such/file.txt", &mut valid, &mut invalid)
            .is_err());
    }
}
