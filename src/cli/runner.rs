use crate::{
    cache::GenerationRecordStore,
    cli::Args,
    config::{GeneratorsConfig, Selection},
    constants::DEFAULT_CACHES_DIR,
    emitter::FileEmitter,
    error::Result,
    generators::{plan, GeneratorPlan},
    ioutils::resolve_path,
    renderer::PlaceholderRenderer,
    template::EmitOutcome,
};
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};

/// What a run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub validated: Vec<String>,
    pub generated: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
}

/// Main CLI runner that orchestrates validation, generation and cleanup
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the run, writing the trace to stdout
    pub fn run(self) -> Result<RunReport> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out)
    }

    /// Executes the run, writing the trace to `out`
    ///
    /// Every selected generator is loaded and planned before the first file
    /// is written. The record of generated files is only updated after all
    /// files were emitted and stale ones removed.
    pub fn run_with_output<W: Write>(self, out: &mut W) -> Result<RunReport> {
        let engine = PlaceholderRenderer::new();
        let working_dir = self.working_dir()?;
        let (registry, registry_path) = self.load_registry(&working_dir)?;
        let mut report = RunReport::default();

        if self.args.validate_all {
            for id in registry.select(&Selection::All)? {
                self.trace(out, format!("Validating generator: {id}"))?;
                let generator_plan = plan(&id, registry.generator(&id)?, &working_dir, &engine)?;
                debug!("Generator '{}' plans {} files", id, generator_plan.operations.len());
                report.validated.push(id);
            }
        }

        let Some(selection) = self.args.selection() else {
            return Ok(report);
        };

        let mut plans: Vec<GeneratorPlan> = Vec::new();
        for id in registry.select(&selection)? {
            self.trace(out, format!("Running generator: {id}"))?;
            plans.push(plan(&id, registry.generator(&id)?, &working_dir, &engine)?);
        }

        let mut emitter = FileEmitter::new(self.args.dry_run);
        for operation in plans.iter().flat_map(|generator_plan| &generator_plan.operations) {
            let outcome = emitter.emit(operation)?;
            let message = operation.get_message(outcome);
            match outcome {
                EmitOutcome::Written => {
                    self.trace(out, message)?;
                    report.generated.push(operation.target.clone());
                }
                EmitOutcome::Skipped => self.trace(out, message)?,
                EmitOutcome::Unchanged => {
                    debug!("{message}");
                    report.unchanged.push(operation.target.clone());
                }
            }
        }

        if self.args.dry_run {
            info!("Dry run: generation record left untouched");
            return Ok(report);
        }

        let store = GenerationRecordStore::new(self.caches_dir(&working_dir, &registry_path));
        for removed in store.reconcile(emitter.record())? {
            self.trace(out, format!("Removed file: {}", removed.display()))?;
            report.removed.push(removed);
        }
        Ok(report)
    }

    /// Resolves the working directory against the process' current directory
    fn working_dir(&self) -> Result<PathBuf> {
        let current_dir = std::env::current_dir()?;
        Ok(match &self.args.working_dir {
            Some(dir) => resolve_path(&current_dir, dir),
            None => current_dir,
        })
    }

    /// Loads the registry given with `--config`, or finds it in the working directory
    ///
    /// A relative `--config` is taken relative to the working directory.
    fn load_registry(&self, working_dir: &Path) -> Result<(GeneratorsConfig, PathBuf)> {
        match &self.args.config {
            Some(path) => {
                let path = resolve_path(working_dir, path);
                Ok((GeneratorsConfig::from_file(&path)?, path))
            }
            None => GeneratorsConfig::load_config(working_dir),
        }
    }

    /// `--caches-dir` under the working directory, or `caches/` next to the registry
    fn caches_dir(&self, working_dir: &Path, registry_path: &Path) -> PathBuf {
        match &self.args.caches_dir {
            Some(dir) => resolve_path(working_dir, dir),
            None => registry_path
                .parent()
                .map(|parent| parent.join(DEFAULT_CACHES_DIR))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHES_DIR)),
        }
    }

    fn trace<W: Write>(&self, out: &mut W, message: String) -> Result<()> {
        if !self.args.quiet {
            writeln!(out, "{message}")?;
        }
        Ok(())
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<RunReport> {
    let runner = Runner::new(args);
    runner.run()
}
