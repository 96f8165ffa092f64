use std::path::PathBuf;

/// A file the current run wants to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOperation {
    /// Template the content was rendered from.
    pub template: String,
    pub target: PathBuf,
    /// Rendered content, without the trailing line terminator.
    pub content: String,
}

/// What happened to a target when an operation was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitOutcome {
    Written,
    /// The file already had the expected content and was left untouched.
    Unchanged,
    /// Dry run, nothing was touched.
    Skipped,
}

impl GenerateOperation {
    pub fn new<T: Into<String>, P: Into<PathBuf>>(template: T, target: P, content: String) -> Self {
        Self { template: template.into(), target: target.into(), content }
    }

    /// Gets a message describing the operation and its outcome.
    ///
    /// # Arguments
    /// * `outcome` - Result of emitting this operation
    ///
    /// # Returns
    /// * `String` - A descriptive message about the operation
    pub fn get_message(&self, outcome: EmitOutcome) -> String {
        match outcome {
            EmitOutcome::Written => format!("Generated file: {}", self.target.display()),
            EmitOutcome::Unchanged => format!("Unchanged file: {}", self.target.display()),
            EmitOutcome::Skipped => format!(
                "[DRY RUN] Would generate file: {} (from template '{}')",
                self.target.display(),
                self.template
            ),
        }
    }
}
