//! Overlap scan command implementation.
//!
//! Re-reads the valid-articles artifact and reports every pair of
//! articles whose page ranges intersect.

use crate::classify::Article;
use crate::config::{PairMode, ScanConfig, ScanScope};
use crate::manifest::{ManifestError, ManifestReader, Result};
use std::fmt;
use std::io::Write;
use std::path::Path;

/// Statistics from an overlap scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlapScanStats {
    /// Articles that entered the scan.
    pub articles: usize,
    /// Pairs examined.
    pub pairs: usize,
    /// Pairs that overlapped (report lines written).
    pub overlaps: usize,
}

impl fmt::Display for OverlapScanStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "articles: {}, pairs examined: {}, overlaps: {}",
            self.articles, self.pairs, self.overlaps
        )
    }
}

/// Overlap scan command configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapScanCommand {
    pub config: ScanConfig,
}

impl OverlapScanCommand {
    pub fn new() -> Self {
        Self {
            config: ScanConfig::default(),
        }
    }

    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan the valid-articles artifact and write report lines.
    pub fn run<P: AsRef<Path>, W: Write>(
        &self,
        valid_path: P,
        report: &mut W,
    ) -> Result<OverlapScanStats> {
        let lines = self.read_articles(valid_path)?;
        self.scan(&lines, report)
    }

    /// Load the artifact back as per-line article lists.
    ///
    /// Every token in the artifact was written by the classifier and must
    /// re-parse; one that does not means the artifact was corrupted or
    /// replaced out from under us, which is fatal rather than a format
    /// error to recover from.
    fn read_articles<P: AsRef<Path>>(&self, valid_path: P) -> Result<Vec<Vec<Article>>> {
        let mut reader = ManifestReader::from_path(valid_path)?;
        let mut lines = Vec::new();

        while let Some(record) = reader.read_record()? {
            if let Some(bad) = record.invalid.first() {
                return Err(ManifestError::Parse {
                    line: reader.line_number(),
                    message: format!("unparseable token '{}' in valid-articles artifact", bad),
                });
            }
            lines.push(record.valid);
        }

        Ok(lines)
    }

    /// Run the pairwise scan over the configured scope.
    pub fn scan<W: Write>(
        &self,
        lines: &[Vec<Article>],
        report: &mut W,
    ) -> Result<OverlapScanStats> {
        let mut stats = OverlapScanStats::default();

        match self.config.scope {
            ScanScope::File => {
                let pool: Vec<&Article> = lines.iter().flatten().collect();
                self.scan_pool(&pool, report, &mut stats)?;
            }
            ScanScope::Line => {
                for line in lines {
                    let pool: Vec<&Article> = line.iter().collect();
                    self.scan_pool(&pool, report, &mut stats)?;
                }
            }
            ScanScope::FinalLine => {
                if let Some(line) = lines.last() {
                    let pool: Vec<&Article> = line.iter().collect();
                    self.scan_pool(&pool, report, &mut stats)?;
                }
            }
        }

        Ok(stats)
    }

    fn scan_pool<W: Write>(
        &self,
        pool: &[&Article],
        report: &mut W,
        stats: &mut OverlapScanStats,
    ) -> Result<()> {
        stats.articles += pool.len();

        match self.config.pairing {
            PairMode::Unique => {
                for i in 0..pool.len() {
                    for j in (i + 1)..pool.len() {
                        self.check_pair(pool[i], pool[j], report, stats)?;
                    }
                }
            }
            PairMode::Ordered => {
                for i in 0..pool.len() {
                    for j in 0..pool.len() {
                        self.check_pair(pool[i], pool[j], report, stats)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn check_pair<W: Write>(
        &self,
        a: &Article,
        b: &Article,
        report: &mut W,
        stats: &mut OverlapScanStats,
    ) -> Result<()> {
        stats.pairs += 1;
        if let Some(shared) = a.range.overlap(&b.range) {
            writeln!(
                report,
                "articles {} and {} overlap on pages {}",
                a.token, b.token, shared
            )?;
            stats.overlaps += 1;
        }
        Ok(())
    }
}
