//! End-to-end manifest processing: partition, then overlap scan.

use crate::commands::{OverlapScanCommand, OverlapScanStats, PartitionCommand, PartitionStats};
use crate::config::{Logger, ScanConfig};
use crate::manifest::Result;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Artifact holding the valid tokens of each manifest line.
pub const VALID_ARTICLES_FILE: &str = "valid_articles.txt";
/// Artifact holding the invalid tokens of each manifest line.
pub const INVALID_ARTICLES_FILE: &str = "invalid_articles.txt";
/// Artifact holding one line per overlapping article pair.
pub const OVERLAP_REPORT_FILE: &str = "overlap_report.txt";

/// Combined statistics from both pipeline phases.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineStats {
    pub partition: PartitionStats,
    pub scan: OverlapScanStats,
}

impl fmt::Display for PipelineStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "partition [{}], scan [{}]", self.partition, self.scan)
    }
}

/// The whole-file processor.
///
/// Recreates the three artifacts inside the output directory, streams the
/// input manifest through the partition command, then re-reads the valid
/// artifact and runs the overlap scan. Any I/O failure aborts the run;
/// partially written artifacts may remain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    pub scan: ScanConfig,
}

impl Pipeline {
    pub fn new(scan: ScanConfig) -> Self {
        Self { scan }
    }

    pub fn run<W: Write>(
        &self,
        input: &Path,
        output_dir: &Path,
        logger: &mut Logger<W>,
    ) -> Result<PipelineStats> {
        let valid_path = output_dir.join(VALID_ARTICLES_FILE);
        let invalid_path = output_dir.join(INVALID_ARTICLES_FILE);
        let report_path = output_dir.join(OVERLAP_REPORT_FILE);

        logger.debug(&format!("partitioning '{}'", input.display()));
        let partition = {
            let mut valid_out = BufWriter::new(recreate_artifact(&valid_path)?);
            let mut invalid_out = BufWriter::new(recreate_artifact(&invalid_path)?);
            let stats = PartitionCommand::new().run(input, &mut valid_out, &mut invalid_out)?;
            valid_out.flush()?;
            invalid_out.flush()?;
            stats
        };
        logger.debug(&format!("partition done: {}", partition));

        logger.debug(&format!("scanning '{}'", valid_path.display()));
        let scan = {
            let mut report = BufWriter::new(recreate_artifact(&report_path)?);
            let stats = OverlapScanCommand::with_config(self.scan).run(&valid_path, &mut report)?;
            report.flush()?;
            stats
        };
        logger.debug(&format!("scan done: {}", scan));

        Ok(PipelineStats { partition, scan })
    }
}

/// Remove a stale artifact if present and create it fresh, so reruns
/// never append to a previous run's output.
fn recreate_artifact(path: &Path) -> Result<File> {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    Ok(File::create(path)?)
}
