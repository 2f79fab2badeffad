//! Migration reports.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::RelationshipDescriptor;

/// A record that could not be migrated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordFailure {
    pub file: String,
    /// Position of the record in its file.
    pub index: usize,
    pub iid: Option<String>,
    pub message: String,
}

/// Outcome of migrating one input file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileReport {
    pub file: String,
    pub label: Option<String>,
    /// Records found in the file.
    pub records: usize,
    pub migrated_by_class: BTreeMap<String, usize>,
    /// Records whose `classKind` has no template, per class.
    pub skipped_unknown: BTreeMap<String, usize>,
    /// Malformed records.
    pub invalid: Vec<RecordFailure>,
    /// Records the graph refused, such as duplicate iids.
    pub rejected: Vec<RecordFailure>,
    /// Descriptors staged by this file's records.
    pub staged: usize,
}

impl FileReport {
    pub fn migrated(&self) -> usize {
        self.migrated_by_class.values().sum()
    }

    pub fn skipped(&self) -> usize {
        self.skipped_unknown.values().sum()
    }

    pub fn has_warnings(&self) -> bool {
        self.skipped() > 0 || !self.invalid.is_empty() || !self.rejected.is_empty()
    }

    /// Migrated classes, most common first.
    pub fn census(&self) -> Vec<(&str, usize)> {
        most_common(&self.migrated_by_class)
    }
}

/// A relationship that could not be committed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipFailure {
    pub descriptor: RelationshipDescriptor,
    pub message: String,
}

/// Outcome of replaying the staged relationships.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RelationshipReport {
    pub detected: usize,
    pub detected_by_kind: BTreeMap<String, usize>,
    pub committed: usize,
    /// Descriptors with an endpoint that never made it into the graph.
    pub dangling: Vec<RelationshipFailure>,
    /// Descriptors the graph refused for any other reason.
    pub rejected: Vec<RelationshipFailure>,
}

impl RelationshipReport {
    /// Relation labels, most common first.
    pub fn census(&self) -> Vec<(&str, usize)> {
        most_common(&self.detected_by_kind)
    }

    pub fn has_warnings(&self) -> bool {
        !self.dangling.is_empty() || !self.rejected.is_empty()
    }
}

/// Outcome of a full two-phase run.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub files: Vec<FileReport>,
    pub relationships: RelationshipReport,
}

impl MigrationReport {
    pub fn entities_migrated(&self) -> usize {
        self.files.iter().map(FileReport::migrated).sum()
    }

    pub fn records_skipped(&self) -> usize {
        self.files.iter().map(FileReport::skipped).sum()
    }

    pub fn records_invalid(&self) -> usize {
        self.files
            .iter()
            .map(|f| f.invalid.len() + f.rejected.len())
            .sum()
    }

    /// Whether the run completed with data-quality problems.
    pub fn has_warnings(&self) -> bool {
        self.files.iter().any(FileReport::has_warnings) || self.relationships.has_warnings()
    }

    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

fn most_common(counts: &BTreeMap<String, usize>) -> Vec<(&str, usize)> {
    let mut sorted: Vec<_> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    // Stable sort keeps ties in name order.
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_census_most_common_first() {
        let mut report = RelationshipReport::default();
        report.detected_by_kind.insert("Reference_owner".into(), 3);
        report.detected_by_kind.insert("Containement_parameter".into(), 5);
        report.detected_by_kind.insert("Reference_category".into(), 3);

        assert_eq!(
            report.census(),
            vec![
                ("Containement_parameter", 5),
                ("Reference_category", 3),
                ("Reference_owner", 3),
            ]
        );
    }

    #[test]
    fn test_file_warnings() {
        let mut report = FileReport::default();
        report.migrated_by_class.insert("Option".into(), 2);
        assert!(!report.has_warnings());
        assert_eq!(report.migrated(), 2);

        report.skipped_unknown.insert("Widget".into(), 1);
        assert!(report.has_warnings());
        assert_eq!(report.skipped(), 1);
    }
}
