use crate::model::RelationshipDescriptor;
use crate::templates::RelationshipSink;

use super::error::StagingError;
use super::RelationshipStaging;

/// In-memory staging for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStaging {
    descriptors: Vec<RelationshipDescriptor>,
}

impl MemoryStaging {
    pub fn new() -> Self {
        Self::default()
    }

    /// Staged descriptors, in append order.
    pub fn descriptors(&self) -> &[RelationshipDescriptor] {
        &self.descriptors
    }
}

impl RelationshipSink for MemoryStaging {
    fn append(&mut self, descriptor: RelationshipDescriptor) {
        self.descriptors.push(descriptor);
    }
}

impl RelationshipStaging for MemoryStaging {
    fn len(&self) -> usize {
        self.descriptors.len()
    }

    fn flush(&mut self) -> Result<(), StagingError> {
        Ok(())
    }

    fn drain_all(&mut self) -> Result<Vec<RelationshipDescriptor>, StagingError> {
        Ok(std::mem::take(&mut self.descriptors))
    }

    fn checkpoint(&mut self, _replayed: usize) -> Result<(), StagingError> {
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StagingError> {
        self.descriptors.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RelationKind;

    fn descriptor(n: usize) -> RelationshipDescriptor {
        RelationshipDescriptor::new(
            RelationKind::Containment,
            "parameter",
            "ElementDefinition",
            format!("E{n}"),
            "Parameter",
            format!("P{n}"),
        )
    }

    #[test]
    fn test_append_then_drain_in_order() {
        let mut staging = MemoryStaging::new();
        for n in 0..5 {
            staging.append(descriptor(n));
        }
        assert_eq!(staging.len(), 5);

        let drained = staging.drain_all().unwrap();
        assert_eq!(drained.len(), 5);
        assert_eq!(drained[0].player1, "E0");
        assert_eq!(drained[4].player2, "P4");
        assert!(staging.is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut staging = MemoryStaging::new();
        staging.append(descriptor(1));
        staging.append(descriptor(1));
        assert_eq!(staging.len(), 2);
    }
}
