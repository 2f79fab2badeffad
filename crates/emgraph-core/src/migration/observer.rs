//! Progress callbacks.

use super::manifest::InputFile;
use super::report::{FileReport, RelationshipReport};

/// Receives progress while a migration runs.
///
/// Every method has an empty default, so implementors only override what
/// they display.
pub trait MigrationObserver: Send + Sync {
    fn file_started(&self, _input: &InputFile, _records: usize) {}

    fn record_processed(&self) {}

    fn file_finished(&self, _report: &FileReport) {}

    fn replay_started(&self, _descriptors: usize) {}

    fn relationship_processed(&self) {}

    fn replay_finished(&self, _report: &RelationshipReport) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl MigrationObserver for NoopObserver {}
