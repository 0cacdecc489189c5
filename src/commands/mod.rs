//! Command implementations for MARO.

pub mod overlap;
pub mod partition;

pub use overlap::{OverlapScanCommand, OverlapScanStats};
pub use partition::{PartitionCommand, PartitionStats};
