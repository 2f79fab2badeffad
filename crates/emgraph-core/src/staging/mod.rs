//! Relationship staging.
//!
//! Templates discover relationships while phase 1 is still inserting
//! entities, so the edges cannot be committed yet. They are parked here and
//! replayed once every entity exists.

mod error;
mod file;
mod memory;

pub use error::StagingError;
pub use file::FileStaging;
pub use memory::MemoryStaging;

use crate::model::RelationshipDescriptor;
use crate::templates::RelationshipSink;

/// Trait for relationship staging backends.
///
/// Appending never fails; durability is only promised after [`flush`].
/// There is no deduplication: staging the same descriptor twice replays it
/// twice.
///
/// [`flush`]: RelationshipStaging::flush
pub trait RelationshipStaging: RelationshipSink + Send {
    /// Number of descriptors currently staged.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Persist everything appended so far.
    fn flush(&mut self) -> Result<(), StagingError>;

    /// Take every staged descriptor, in append order.
    ///
    /// The persisted copy is left alone so that an interrupted replay can be
    /// resumed; call [`clear`](RelationshipStaging::clear) once the replay has
    /// finished.
    fn drain_all(&mut self) -> Result<Vec<RelationshipDescriptor>, StagingError>;

    /// Record that the first `replayed` descriptors of the last drain have
    /// been replayed. A store reopened afterwards holds only the rest.
    fn checkpoint(&mut self, replayed: usize) -> Result<(), StagingError>;

    /// Discard staged descriptors, including the persisted copy.
    fn clear(&mut self) -> Result<(), StagingError>;
}
