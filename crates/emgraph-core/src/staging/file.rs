use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::RelationshipDescriptor;
use crate::templates::RelationshipSink;

use super::error::StagingError;
use super::RelationshipStaging;

/// On-disk layout: one JSON object holding seven parallel arrays, where
/// index `i` across all arrays is descriptor `i`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StagingFile {
    relationship: Vec<String>,
    role1: Vec<String>,
    class1: Vec<String>,
    player1: Vec<String>,
    role2: Vec<String>,
    class2: Vec<String>,
    player2: Vec<String>,
}

impl StagingFile {
    fn from_descriptors(descriptors: &[RelationshipDescriptor]) -> Self {
        let mut file = Self::default();
        for d in descriptors {
            file.relationship.push(d.relationship.clone());
            file.role1.push(d.role1.clone());
            file.class1.push(d.class1.clone());
            file.player1.push(d.player1.clone());
            file.role2.push(d.role2.clone());
            file.class2.push(d.class2.clone());
            file.player2.push(d.player2.clone());
        }
        file
    }

    fn into_descriptors(self, path: &Path) -> Result<Vec<RelationshipDescriptor>, StagingError> {
        let n = self.relationship.len();
        let lengths = [
            self.role1.len(),
            self.class1.len(),
            self.player1.len(),
            self.role2.len(),
            self.class2.len(),
            self.player2.len(),
        ];
        if lengths.iter().any(|&len| len != n) {
            return Err(StagingError::Corrupt {
                path: path.to_path_buf(),
                reason: format!("parallel arrays differ in length ({n} vs {lengths:?})"),
            });
        }

        let descriptors = self
            .relationship
            .into_iter()
            .zip(self.role1)
            .zip(self.class1)
            .zip(self.player1)
            .zip(self.role2)
            .zip(self.class2)
            .zip(self.player2)
            .map(
                |((((((relationship, role1), class1), player1), role2), class2), player2)| {
                    RelationshipDescriptor {
                        relationship,
                        role1,
                        class1,
                        player1,
                        role2,
                        class2,
                        player2,
                    }
                },
            )
            .collect();
        Ok(descriptors)
    }
}

/// File-backed staging.
///
/// Descriptors are buffered in memory and written out as a whole on every
/// [`flush`](RelationshipStaging::flush), through a temp file and a rename so
/// a crash never leaves a half-written file behind. Opening an existing file
/// resumes from its contents.
///
/// Drained descriptors are kept until [`clear`](RelationshipStaging::clear)
/// so that a [`checkpoint`](RelationshipStaging::checkpoint) can rewrite the
/// file with only the part of the replay still outstanding.
#[derive(Debug)]
pub struct FileStaging {
    path: PathBuf,
    descriptors: Vec<RelationshipDescriptor>,
    drained: Vec<RelationshipDescriptor>,
}

impl FileStaging {
    /// Open the staging file at `path`, loading it if it exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StagingError> {
        let path = path.into();
        let descriptors = if path.exists() {
            let json = fs::read_to_string(&path).map_err(|e| StagingError::io(&path, e))?;
            if json.trim().is_empty() {
                Vec::new()
            } else {
                let file: StagingFile = serde_json::from_str(&json)?;
                file.into_descriptors(&path)?
            }
        } else {
            Vec::new()
        };

        debug!(path = %path.display(), staged = descriptors.len(), "Opened staging file");
        Ok(Self {
            path,
            descriptors,
            drained: Vec::new(),
        })
    }

    /// Start with an empty store, discarding any existing file.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, StagingError> {
        let mut staging = Self {
            path: path.into(),
            descriptors: Vec::new(),
            drained: Vec::new(),
        };
        staging.clear()?;
        Ok(staging)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn ensure_parent_dir(&self) -> Result<(), StagingError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| StagingError::io(dir, e))?;
            }
        }
        Ok(())
    }

    fn write(&self, descriptors: &[RelationshipDescriptor]) -> Result<(), StagingError> {
        self.ensure_parent_dir()?;

        let json = serde_json::to_string(&StagingFile::from_descriptors(descriptors))?;
        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(|e| StagingError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| StagingError::io(&self.path, e))
    }
}

impl RelationshipSink for FileStaging {
    fn append(&mut self, descriptor: RelationshipDescriptor) {
        self.descriptors.push(descriptor);
    }
}

impl RelationshipStaging for FileStaging {
    fn len(&self) -> usize {
        self.descriptors.len()
    }

    fn flush(&mut self) -> Result<(), StagingError> {
        self.write(&self.descriptors)?;
        debug!(path = %self.path.display(), staged = self.descriptors.len(), "Flushed staging file");
        Ok(())
    }

    fn drain_all(&mut self) -> Result<Vec<RelationshipDescriptor>, StagingError> {
        self.drained = std::mem::take(&mut self.descriptors);
        Ok(self.drained.clone())
    }

    fn checkpoint(&mut self, replayed: usize) -> Result<(), StagingError> {
        let outstanding = &self.drained[replayed.min(self.drained.len())..];
        self.write(outstanding)?;
        debug!(path = %self.path.display(), outstanding = outstanding.len(), "Checkpointed staging file");
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StagingError> {
        self.descriptors.clear();
        self.drained.clear();
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| StagingError::io(&self.path, e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RelationKind;
    use tempfile::TempDir;

    fn owner(player1: &str) -> RelationshipDescriptor {
        RelationshipDescriptor::new(
            RelationKind::Reference,
            "owner",
            "ElementDefinition",
            player1,
            "DomainOfExpertise",
            "D1",
        )
    }

    #[test]
    fn test_file_layout_is_parallel_arrays() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("staging.json");

        let mut staging = FileStaging::open(&path).unwrap();
        staging.append(owner("E1"));
        staging.append(owner("E2"));
        staging.flush().unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        for key in ["relationship", "role1", "class1", "player1", "role2", "class2", "player2"] {
            assert_eq!(json[key].as_array().unwrap().len(), 2, "{key}");
        }
        assert_eq!(json["relationship"][0], "Reference_owner");
        assert_eq!(json["player1"][1], "E2");
        assert!(!staging.temp_path().exists());
    }

    #[test]
    fn test_reopen_resumes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("staging.json");

        let mut staging = FileStaging::open(&path).unwrap();
        staging.append(owner("E1"));
        staging.flush().unwrap();
        drop(staging);

        let mut reopened = FileStaging::open(&path).unwrap();
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.drain_all().unwrap(), vec![owner("E1")]);
    }

    #[test]
    fn test_unflushed_appends_are_not_durable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("staging.json");

        let mut staging = FileStaging::open(&path).unwrap();
        staging.append(owner("E1"));
        drop(staging);

        assert!(FileStaging::open(&path).unwrap().is_empty());
    }

    #[test]
    fn test_checkpoint_keeps_only_outstanding() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("staging.json");

        let mut staging = FileStaging::open(&path).unwrap();
        for iid in ["E1", "E2", "E3"] {
            staging.append(owner(iid));
        }
        staging.flush().unwrap();

        assert_eq!(staging.drain_all().unwrap().len(), 3);
        staging.checkpoint(2).unwrap();
        assert_eq!(
            FileStaging::open(&path).unwrap().drain_all().unwrap(),
            vec![owner("E3")]
        );

        // Offsets count from the drain, not from the previous checkpoint.
        staging.checkpoint(3).unwrap();
        assert!(path.exists());
        assert!(FileStaging::open(&path).unwrap().is_empty());
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("staging.json");

        let mut staging = FileStaging::open(&path).unwrap();
        staging.append(owner("E1"));
        staging.flush().unwrap();
        staging.clear().unwrap();

        assert!(!path.exists());
        assert!(FileStaging::open(&path).unwrap().is_empty());
    }

    #[test]
    fn test_mismatched_arrays_are_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("staging.json");
        fs::write(
            &path,
            r#"{"relationship":["Reference_owner"],"role1":[],"class1":[],"player1":[],
                "role2":[],"class2":[],"player2":[]}"#,
        )
        .unwrap();

        assert!(matches!(
            FileStaging::open(&path),
            Err(StagingError::Corrupt { .. })
        ));
    }
}
