use crate::error::Result;
use crate::ioutils::write_file;
use crate::template::{EmitOutcome, GenerateOperation};
use indexmap::IndexSet;
use std::path::{Path, PathBuf};

/// Writes planned files and records every path the run produced.
#[derive(Debug, Default)]
pub struct FileEmitter {
    dry_run: bool,
    record: IndexSet<PathBuf>,
}

impl FileEmitter {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run, record: IndexSet::new() }
    }

    /// Emits one planned file.
    pub fn emit(&mut self, operation: &GenerateOperation) -> Result<EmitOutcome> {
        self.emit_content(&operation.target, &operation.content)
    }

    /// Writes `content` plus a trailing newline to `path` unless the file
    /// already holds exactly that. The path is recorded either way.
    pub fn emit_content<P: AsRef<Path>>(&mut self, path: P, content: &str) -> Result<EmitOutcome> {
        let path = path.as_ref();
        self.record.insert(path.to_path_buf());

        if self.dry_run {
            return Ok(EmitOutcome::Skipped);
        }

        let expected = format!("{content}\n");
        if path.is_file() && std::fs::read(path)? == expected.as_bytes() {
            return Ok(EmitOutcome::Unchanged);
        }

        write_file(expected.as_bytes(), path)?;
        Ok(EmitOutcome::Written)
    }

    pub fn record(&self) -> &IndexSet<PathBuf> {
        &self.record
    }

    pub fn into_record(self) -> IndexSet<PathBuf> {
        self.record
    }
}
