//! The delimited text file an export reads rows from.

use std::path::{Path, PathBuf};

use crate::error::{ExportError, Result};

/// File name the text driver looks for next to the staging file.
pub const SCHEMA_FILE: &str = "schema.ini";

/// A delimited text file the Access engine reads rows from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    directory: PathBuf,
    file_name: String,
}

impl StagedFile {
    pub fn new(directory: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_name: file_name.into(),
        }
    }

    /// Locate an existing text file, resolving it to an absolute path.
    pub fn locate(path: &Path) -> Result<Self> {
        let absolute = std::path::absolute(path)?;
        let file_name = absolute
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ExportError::Config(format!("{} does not name a file", path.display()))
            })?;
        let directory = absolute
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(Self::new(directory, file_name))
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Where the descriptor for this file must live.
    pub fn descriptor_path(&self) -> PathBuf {
        self.directory.join(SCHEMA_FILE)
    }
}
