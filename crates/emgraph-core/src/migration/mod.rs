//! Two-phase migration of JSON exports into the graph.
//!
//! ## Components
//!
//! - `Migrator` - Runs phase 1 (entities) and phase 2 (relationships)
//! - `Manifest` / `InputFile` - Which files to load, in which order
//! - `RetryPolicy` - Bounded retry for transient graph errors
//! - `MigrationObserver` - Progress callbacks for front ends

mod error;
mod manifest;
mod observer;
mod orchestrator;
mod report;
mod retry;

pub use error::MigrationError;
pub use manifest::{InputFile, Manifest};
pub use observer::{MigrationObserver, NoopObserver};
pub use orchestrator::{read_records, Migrator};
pub use report::{
    FileReport, MigrationReport, RecordFailure, RelationshipFailure, RelationshipReport,
};
pub use retry::RetryPolicy;
