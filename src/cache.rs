//! Persisted record of the files produced by the previous run.

use crate::constants::PREVIOUSLY_GENERATED_FILES;
use crate::error::Result;
use crate::ioutils::create_dir_all;
use indexmap::IndexSet;
use log::debug;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Stores the generation record as one path per line in the caches
/// directory.
#[derive(Debug, Clone)]
pub struct GenerationRecordStore {
    path: PathBuf,
}

impl GenerationRecordStore {
    pub fn new<P: AsRef<Path>>(caches_dir: P) -> Self {
        Self { path: caches_dir.as_ref().join(PREVIOUSLY_GENERATED_FILES) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the previous record; a missing record is empty.
    pub fn load(&self) -> Result<IndexSet<PathBuf>> {
        if !self.path.is_file() {
            debug!("No previous generation record at {}", self.path.display());
            return Ok(IndexSet::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(content.lines().filter(|line| !line.is_empty()).map(PathBuf::from).collect())
    }

    /// Paths of the previous record that the current run did not produce.
    pub fn stale<'a>(
        previous: &'a IndexSet<PathBuf>,
        current: &'a IndexSet<PathBuf>,
    ) -> Vec<&'a PathBuf> {
        previous.difference(current).collect()
    }

    /// Deletes stale files and persists the current record.
    ///
    /// Stale paths that no longer exist are skipped. Returns the removed
    /// files. The record is rewritten only when it changed.
    pub fn reconcile(&self, current: &IndexSet<PathBuf>) -> Result<Vec<PathBuf>> {
        let previous = self.load()?;

        let mut removed = Vec::new();
        for path in Self::stale(&previous, current) {
            if path.is_file() {
                std::fs::remove_file(path)?;
                removed.push(path.clone());
            } else {
                debug!("Stale file {} is already gone", path.display());
            }
        }

        if previous.iter().ne(current.iter()) || !self.path.is_file() {
            self.persist(current)?;
        }
        Ok(removed)
    }

    /// Writes the record atomically through a temporary file in the caches
    /// directory.
    pub fn persist(&self, current: &IndexSet<PathBuf>) -> Result<()> {
        let caches_dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        create_dir_all(caches_dir)?;

        let mut file = NamedTempFile::new_in(caches_dir)?;
        for path in current {
            writeln!(file, "{}", path.display())?;
        }
        file.flush()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        debug!("Persisted generation record to {}", self.path.display());
        Ok(())
    }
}
