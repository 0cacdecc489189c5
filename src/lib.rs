// Clippy allows for the whole crate
#![allow(clippy::should_implement_trait)]

//! MARO: Magazine Article Range Overlapper
//!
//! This library validates magazine article page-range manifests and
//! reports overlapping page ranges between articles.
//!
//! # Example
//!
//! ```rust,no_run
//! use maro::config::{Logger, ScanConfig, Verbosity};
//! use maro::pipeline::Pipeline;
//! use std::path::Path;
//!
//! let mut logger = Logger::new(std::io::stderr(), Verbosity::Info);
//! let pipeline = Pipeline::new(ScanConfig::default());
//! let stats = pipeline
//!     .run(Path::new("issue.txt"), Path::new("."), &mut logger)
//!     .unwrap();
//! eprintln!("{}", stats);
//! ```

pub mod classify;
pub mod commands;
pub mod config;
pub mod manifest;
pub mod pipeline;
pub mod range;

// Re-export commonly used types
pub use classify::{Article, ClassifiedLine};
pub use manifest::{parse_manifest, read_classified, ManifestError, ManifestReader};
pub use range::{PageRange, RangeFormatError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::classify::{Article, ClassifiedLine};
    pub use crate::commands::{OverlapScanCommand, PartitionCommand};
    pub use crate::config::{Logger, PairMode, ScanConfig, ScanScope, Verbosity};
    pub use crate::manifest::{ManifestError, ManifestReader};
    pub use crate::pipeline::Pipeline;
    pub use crate::range::{PageRange, RangeFormatError};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_basic_workflow() {
        use crate::commands::OverlapScanCommand;
        use crate::manifest::parse_manifest;

        let content = "10-15, 12-18, abc-def\n";
        let lines = parse_manifest(content).unwrap();
        assert_eq!(lines[0].valid_line(), "10-15,12-18");
        assert_eq!(lines[0].invalid_line(), "abc-def");

        let articles: Vec<_> = lines.into_iter().map(|l| l.valid).collect();
        let cmd = OverlapScanCommand::new();
        let mut report = Vec::new();
        let stats = cmd.scan(&articles, &mut report).unwrap();

        assert_eq!(stats.overlaps, 1);
        assert_eq!(
            String::from_utf8(report).unwrap(),
            "articles 10-15 and 12-18 overlap on pages 12-15\n"
        );
    }
}
