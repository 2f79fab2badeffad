//! Input manifests.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One input file of a data set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFile {
    /// File name, with or without the `.json` extension.
    pub file: String,

    /// Directory the file lives in.
    #[serde(default)]
    pub base_dir: PathBuf,

    /// What the file holds ("iteration", "SiteDirectory", ...). Only used
    /// for reporting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl InputFile {
    pub fn new(base_dir: impl Into<PathBuf>, file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            base_dir: base_dir.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Full path to the file. `.json` is appended when missing, and a file
    /// name that already starts with the base directory is not joined twice.
    pub fn path(&self) -> PathBuf {
        let mut name = self.file.clone();
        if !name.ends_with(".json") {
            name.push_str(".json");
        }

        let name = Path::new(&name);
        if self.base_dir.as_os_str().is_empty() || name.starts_with(&self.base_dir) {
            name.to_path_buf()
        } else {
            self.base_dir.join(name)
        }
    }

    /// Label if set, file name otherwise.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.file)
    }
}

/// Ordered list of input files. Files are migrated in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub inputs: Vec<InputFile>,
}

impl Manifest {
    pub fn new(inputs: Vec<InputFile>) -> Self {
        Self { inputs }
    }

    pub fn push(&mut self, input: InputFile) {
        self.inputs.push(input);
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputFile> {
        self.inputs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_extension_appended() {
        let input = InputFile::new("data/iterations", "af90770c");
        assert_eq!(input.path(), PathBuf::from("data/iterations/af90770c.json"));

        let input = InputFile::new("data", "SiteDirectory.json");
        assert_eq!(input.path(), PathBuf::from("data/SiteDirectory.json"));
    }

    #[test]
    fn test_base_dir_not_joined_twice() {
        let input = InputFile::new("data", "data/SiteDirectory");
        assert_eq!(input.path(), PathBuf::from("data/SiteDirectory.json"));
    }

    #[test]
    fn test_empty_base_dir() {
        let input = InputFile::new("", "SiteDirectory");
        assert_eq!(input.path(), PathBuf::from("SiteDirectory.json"));
    }

    #[test]
    fn test_display_name() {
        let input = InputFile::new("data", "bff9f871").with_label("SiteReferenceDataLibrary");
        assert_eq!(input.display_name(), "SiteReferenceDataLibrary");
        assert_eq!(InputFile::new("data", "x").display_name(), "x");
    }
}
