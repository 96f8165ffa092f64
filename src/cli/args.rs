use crate::config::Selection;
use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, ArgGroup, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for datagen.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .multiple(true)
        .args(["validate_all", "generator", "group"])
))]
pub struct Args {
    /// Load and plan every registered generator without writing anything.
    #[arg(long = "validate-all")]
    pub validate_all: bool,

    /// Run a single generator.
    #[arg(long, value_name = "NAME", conflicts_with = "group")]
    pub generator: Option<String>,

    /// Run every generator of a group, in group order.
    #[arg(long, value_name = "NAME")]
    pub group: Option<String>,

    /// Suppress the progress trace on stdout.
    #[arg(short, long)]
    pub quiet: bool,

    /// Preview generated files without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Directory holding the record of previously generated files (relative to the working dir).
    #[arg(long = "caches-dir", value_name = "DIR")]
    pub caches_dir: Option<PathBuf>,

    /// Directory generator paths are relative to.
    #[arg(long = "working-dir", value_name = "DIR")]
    pub working_dir: Option<PathBuf>,

    /// Generator registry file, relative to the working dir (default: generators.json there).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The generators to run, if any. `--validate-all` alone runs nothing.
    pub fn selection(&self) -> Option<Selection> {
        match (&self.generator, &self.group) {
            (Some(generator), _) => Some(Selection::Generator(generator.clone())),
            (None, Some(group)) => Some(Selection::Group(group.clone())),
            (None, None) => None,
        }
    }
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            eprintln!("{e}");
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
