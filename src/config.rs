//! Run configuration for MARO behavior.
//!
//! Everything behavioral is an explicit value handed to the pipeline:
//! scan scope, pair enumeration, verbosity, and the log sink. There is
//! no process-global state.

use std::io::Write;

/// Which lines of the valid artifact feed the overlap scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanScope {
    /// All articles across the whole file, cumulatively.
    #[default]
    File,
    /// Each line scanned independently.
    Line,
    /// Only the final line's articles. Matches the historical behavior,
    /// kept as an explicit opt-in.
    FinalLine,
}

impl ScanScope {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "file" => Some(ScanScope::File),
            "line" => Some(ScanScope::Line),
            "final-line" => Some(ScanScope::FinalLine),
            _ => None,
        }
    }
}

/// How article pairs are enumerated during the overlap scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairMode {
    /// Unordered unique pairs, self-pairs excluded.
    #[default]
    Unique,
    /// Full ordered cross product including self-pairs. Matches the
    /// historical behavior: every article also reports a degenerate
    /// overlap with itself, and each pair appears in both orders.
    Ordered,
}

/// Overlap scan configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanConfig {
    pub scope: ScanScope,
    pub pairing: PairMode,
}

/// Log detail level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    #[default]
    Info,
    Debug,
}

/// A verbosity-gated log sink.
///
/// The binary wires this to stderr; tests can wire it to a buffer. Sink
/// write failures are swallowed: diagnostics must never take down a run
/// that is otherwise succeeding.
pub struct Logger<W: Write> {
    sink: W,
    verbosity: Verbosity,
}

impl<W: Write> Logger<W> {
    pub fn new(sink: W, verbosity: Verbosity) -> Self {
        Self { sink, verbosity }
    }

    /// Always emitted.
    pub fn info(&mut self, message: &str) {
        let _ = writeln!(self.sink, "{}", message);
    }

    /// Emitted only at debug verbosity.
    pub fn debug(&mut self, message: &str) {
        if self.verbosity >= Verbosity::Debug {
            let _ = writeln!(self.sink, "[D] {}", message);
        }
    }
}
