//! Terminal progress for migrations.

use std::sync::Mutex;

use emgraph_core::migration::{FileReport, InputFile, MigrationObserver, RelationshipReport};
use indicatif::{ProgressBar, ProgressStyle};

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}";

/// Draws one bar per input file and one for the relationship replay.
pub struct ProgressObserver {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn start(&self, total: usize, message: String) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        bar.set_message(message);
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(previous) = slot.replace(bar) {
                previous.finish_and_clear();
            }
        }
    }

    fn tick(&self) {
        if let Ok(slot) = self.bar.lock() {
            if let Some(bar) = slot.as_ref() {
                bar.inc(1);
            }
        }
    }

    fn finish(&self, message: String) {
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(bar) = slot.take() {
                bar.finish_with_message(message);
            }
        }
    }
}

impl MigrationObserver for ProgressObserver {
    fn file_started(&self, input: &InputFile, records: usize) {
        self.start(records, format!("Loading {}", input.display_name()));
    }

    fn record_processed(&self) {
        self.tick();
    }

    fn file_finished(&self, report: &FileReport) {
        self.finish(format!(
            "{}: {} migrated, {} skipped",
            report.label.as_deref().unwrap_or(&report.file),
            report.migrated(),
            report.skipped()
        ));
    }

    fn replay_started(&self, descriptors: usize) {
        self.start(descriptors, "Committing relationships".to_string());
    }

    fn relationship_processed(&self) {
        self.tick();
    }

    fn replay_finished(&self, report: &RelationshipReport) {
        self.finish(format!(
            "{} of {} relationships committed",
            report.committed, report.detected
        ));
    }
}
