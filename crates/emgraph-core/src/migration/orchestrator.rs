//! Two-phase migration driver.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::graph::{GraphError, GraphStore};
use crate::model::RelationshipDescriptor;
use crate::staging::RelationshipStaging;
use crate::templates::{Record, TemplateRegistry};

use super::error::MigrationError;
use super::manifest::{InputFile, Manifest};
use super::observer::{MigrationObserver, NoopObserver};
use super::report::{
    FileReport, MigrationReport, RecordFailure, RelationshipFailure, RelationshipReport,
};
use super::retry::RetryPolicy;

/// Replayed descriptors between two staging checkpoints.
const CHECKPOINT_INTERVAL: usize = 500;

/// Drives a migration into a graph.
///
/// Phase 1 ([`load_entities`]) inserts one entity per record, one
/// transaction each, and stages the relationships each record implies.
/// Phase 2 ([`commit_relationships`]) replays the staged relationships once
/// every entity exists. Everything is sequential.
///
/// [`load_entities`]: Migrator::load_entities
/// [`commit_relationships`]: Migrator::commit_relationships
pub struct Migrator<G, S> {
    graph: Arc<G>,
    staging: S,
    registry: TemplateRegistry,
    retry: RetryPolicy,
    observer: Arc<dyn MigrationObserver>,
}

impl<G, S> Migrator<G, S>
where
    G: GraphStore,
    S: RelationshipStaging,
{
    pub fn new(graph: Arc<G>, staging: S) -> Self {
        Self {
            graph,
            staging,
            registry: TemplateRegistry::new(),
            retry: RetryPolicy::default(),
            observer: Arc::new(NoopObserver),
        }
    }

    pub fn with_registry(mut self, registry: TemplateRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn MigrationObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn staging(&self) -> &S {
        &self.staging
    }

    pub fn into_staging(self) -> S {
        self.staging
    }

    /// Run both phases.
    pub async fn run(&mut self, manifest: &Manifest) -> Result<MigrationReport, MigrationError> {
        let started_at = Utc::now();
        let files = self.load_entities(manifest).await?;
        let relationships = self.commit_relationships().await?;

        let report = MigrationReport {
            started_at,
            finished_at: Utc::now(),
            files,
            relationships,
        };
        info!(
            entities = report.entities_migrated(),
            relationships = report.relationships.committed,
            skipped = report.records_skipped(),
            invalid = report.records_invalid(),
            dangling = report.relationships.dangling.len(),
            "Migration finished"
        );
        Ok(report)
    }

    /// Phase 1: migrate every input file in manifest order.
    pub async fn load_entities(
        &mut self,
        manifest: &Manifest,
    ) -> Result<Vec<FileReport>, MigrationError> {
        let mut reports = Vec::with_capacity(manifest.len());
        for input in manifest.iter() {
            reports.push(self.load_file(input).await?);
        }
        Ok(reports)
    }

    /// Migrate the records of one file and flush the staged relationships.
    pub async fn load_file(&mut self, input: &InputFile) -> Result<FileReport, MigrationError> {
        let path = input.path();
        let records = read_records(&path)?;

        let mut report = FileReport {
            file: path.display().to_string(),
            label: input.label.clone(),
            records: records.len(),
            ..FileReport::default()
        };
        log_class_census(input, &records);
        self.observer.file_started(input, records.len());

        for (index, value) in records.into_iter().enumerate() {
            self.migrate_record(index, value, &mut report).await?;
            self.observer.record_processed();
        }

        self.staging.flush()?;

        info!(
            file = %report.file,
            migrated = report.migrated(),
            skipped = report.skipped(),
            invalid = report.invalid.len(),
            rejected = report.rejected.len(),
            staged = report.staged,
            "Inserted {} of {} records from {}",
            report.migrated(),
            report.records,
            input.display_name()
        );
        for (class, count) in report.census() {
            debug!(class, count, "Migrated");
        }
        self.observer.file_finished(&report);
        Ok(report)
    }

    async fn migrate_record(
        &mut self,
        index: usize,
        value: Value,
        report: &mut FileReport,
    ) -> Result<(), MigrationError> {
        let record = match Record::from_value(value) {
            Ok(record) => record,
            Err(err) => {
                warn!(file = %report.file, index, error = %err, "Invalid record");
                let failure = record_failure(&report.file, index, None, &err);
                report.invalid.push(failure);
                return Ok(());
            }
        };

        let Some(template) = self.registry.template_for(record.class_kind()) else {
            warn!(class = record.class_kind(), iid = record.iid(), "No template for class, skipping");
            *report
                .skipped_unknown
                .entry(record.class_kind().to_string())
                .or_default() += 1;
            return Ok(());
        };

        // Descriptors are held back until the entity is committed, so a
        // record that fails never stages edges.
        let mut scratch: Vec<RelationshipDescriptor> = Vec::new();
        let statement = match template.render(&record, &mut scratch) {
            Ok(statement) => statement,
            Err(err) => {
                warn!(file = %report.file, index, error = %err, "Invalid record");
                let failure = record_failure(&report.file, index, Some(record.iid()), &err);
                report.invalid.push(failure);
                return Ok(());
            }
        };

        let graph = &self.graph;
        let outcome = self.retry.run(|| graph.insert_entity(&statement)).await;
        match outcome {
            Ok(()) => {
                *report
                    .migrated_by_class
                    .entry(statement.class.as_str().to_string())
                    .or_default() += 1;
                report.staged += scratch.len();
                for descriptor in scratch {
                    self.staging.append(descriptor);
                }
                Ok(())
            }
            Err(err) if err.is_transient() => Err(MigrationError::RetriesExhausted {
                attempts: self.retry.max_attempts,
                source: err,
            }),
            Err(err) => {
                warn!(iid = record.iid(), error = %err, "Entity rejected");
                let failure = record_failure(&report.file, index, Some(record.iid()), &err);
                report.rejected.push(failure);
                Ok(())
            }
        }
    }

    /// Phase 2: replay every staged relationship, one transaction each.
    ///
    /// Progress is checkpointed into the staging every few hundred
    /// descriptors and again before an abort, and the staging is cleared
    /// only once every descriptor has been replayed. Resuming an aborted
    /// replay therefore starts after the last descriptor it got through.
    pub async fn commit_relationships(&mut self) -> Result<RelationshipReport, MigrationError> {
        let descriptors = self.staging.drain_all()?;

        let mut report = RelationshipReport {
            detected: descriptors.len(),
            ..RelationshipReport::default()
        };
        for descriptor in &descriptors {
            *report
                .detected_by_kind
                .entry(descriptor.relationship.clone())
                .or_default() += 1;
        }

        info!("Detected {} relationships", report.detected);
        for (relationship, count) in report.census() {
            info!(relationship, count, "Relationship census");
        }
        self.observer.replay_started(descriptors.len());

        for (replayed, descriptor) in descriptors.into_iter().enumerate() {
            if replayed > 0 && replayed % CHECKPOINT_INTERVAL == 0 {
                self.staging.checkpoint(replayed)?;
            }

            let graph = &self.graph;
            let outcome = self
                .retry
                .run(|| graph.insert_relationship(&descriptor))
                .await;
            match outcome {
                Ok(()) => report.committed += 1,
                Err(GraphError::DanglingReference(message)) => {
                    warn!(%descriptor, "Dangling reference");
                    report.dangling.push(RelationshipFailure {
                        descriptor,
                        message,
                    });
                }
                Err(err) if err.is_transient() => {
                    if let Err(staging_err) = self.staging.checkpoint(replayed) {
                        warn!(error = %staging_err, "Could not checkpoint relationship replay");
                    }
                    return Err(MigrationError::RetriesExhausted {
                        attempts: self.retry.max_attempts,
                        source: err,
                    })
                }
                Err(err) => {
                    warn!(%descriptor, error = %err, "Relationship rejected");
                    report.rejected.push(RelationshipFailure {
                        descriptor,
                        message: err.to_string(),
                    });
                }
            }
            self.observer.relationship_processed();
        }

        self.staging.clear()?;

        info!(
            committed = report.committed,
            dangling = report.dangling.len(),
            rejected = report.rejected.len(),
            "Relationship replay finished"
        );
        self.observer.replay_finished(&report);
        Ok(report)
    }
}

/// Read an input file as a JSON array of records.
pub fn read_records(path: &Path) -> Result<Vec<Value>, MigrationError> {
    let json = std::fs::read_to_string(path).map_err(|e| MigrationError::io(path, e))?;
    let value: Value = serde_json::from_str(&json).map_err(|source| MigrationError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Array(records) => Ok(records),
        _ => Err(MigrationError::NotAnArray(path.to_path_buf())),
    }
}

fn record_failure(
    file: &str,
    index: usize,
    iid: Option<&str>,
    err: &dyn std::fmt::Display,
) -> RecordFailure {
    RecordFailure {
        file: file.to_string(),
        index,
        iid: iid.map(str::to_string),
        message: err.to_string(),
    }
}

fn log_class_census(input: &InputFile, records: &[Value]) {
    let mut classes: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        let class = record
            .get("classKind")
            .and_then(Value::as_str)
            .unwrap_or("<none>");
        *classes.entry(class).or_default() += 1;
    }

    info!(
        "Loading {}: {} records to migrate, of {} different types",
        input.display_name(),
        records.len(),
        classes.len()
    );
    for (class, count) in &classes {
        debug!(class, count, "Class census");
    }
}
