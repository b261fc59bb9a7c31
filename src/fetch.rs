//! Making input files available locally before they are read.

use std::{path::Path, process::Command};

use anyhow::{Context, Result};

use crate::error::ChunkError;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_info;

pub trait DataFetcher {
    /// Guarantee `path` is materialised on local disk.
    fn fetch(&self, path: &Path) -> Result<()>;
}

/// Files are expected to be present already.
pub struct LocalFiles;

impl DataFetcher for LocalFiles {
    fn fetch(&self, path: &Path) -> Result<()> {
        if path.is_file() {
            return Ok(());
        }
        Err(ChunkError::Fetch {
            path: path.to_path_buf(),
            reason: "file does not exist".into(),
        }
        .into())
    }
}

/// Retrieves annexed content with `datalad get`.
pub struct DataladGet {
    pub program: String,
}

impl Default for DataladGet {
    fn default() -> Self {
        Self {
            program: "datalad".into(),
        }
    }
}

impl DataFetcher for DataladGet {
    fn fetch(&self, path: &Path) -> Result<()> {
        log_info!("fetching {} with {} get", path.display(), self.program);
        let output = Command::new(&self.program)
            .arg("get")
            .arg(path)
            .output()
            .with_context(|| format!("failed to spawn {}", self.program))?;

        if !output.status.success() {
            return Err(ChunkError::Fetch {
                path: path.to_path_buf(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        LocalFiles.fetch(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_files_accepts_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(LocalFiles.fetch(file.path()).is_ok());
    }

    #[test]
    fn local_files_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFiles.fetch(&dir.path().join("absent.tsv")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ChunkError>(),
            Some(ChunkError::Fetch { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn failing_fetch_program_is_reported() {
        let fetcher = DataladGet {
            program: "false".into(),
        };
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = fetcher.fetch(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("could not fetch"));
    }
}
