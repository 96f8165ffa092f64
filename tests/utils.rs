#![allow(dead_code)]

use datagen::cli::{Args, RunReport, Runner};
use datagen::error::Result;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

pub const GAME_FIXTURE: &str = "tests/fixtures/game";
pub const GAME_EXPECTED: &str = "tests/expected/game/generated";

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let relative_files = |root: &Path| {
        WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.path().is_file())
            .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
            .collect::<std::collections::BTreeSet<_>>()
    };
    let files1 = relative_files(dir1);
    let files2 = relative_files(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);
    println!();

    for file in files1.difference(&files2) {
        println!("  + {:?} (only in actual)", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?} (only in expected)", file);
    }

    for file in files1.intersection(&files2) {
        let actual = fs::read_to_string(dir1.join(file)).unwrap();
        let expected = fs::read_to_string(dir2.join(file)).unwrap();
        if actual != expected {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{}", actual);
            println!("  --- Expected content:\n{}", expected);
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two directories hold the same files with the same content.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    match dir_diff::is_different(actual, expected) {
        Ok(false) => {}
        Ok(true) => {
            print_dir_diff(actual, expected);
            panic!("Directories differ. See above for details.");
        }
        Err(e) => {
            debug!("Error comparing directories: {e:?}");
            panic!("Could not compare {actual:?} with {expected:?}");
        }
    }
}

/// Recursively copies `from` into `to`.
pub fn copy_dir(from: &Path, to: &Path) {
    for entry in WalkDir::new(from) {
        let entry = entry.unwrap();
        let target = to.join(entry.path().strip_prefix(from).unwrap());
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

/// A copy of a fixture project in a temporary directory.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new(fixture: &str) -> Self {
        let dir = TempDir::new().unwrap();
        copy_dir(Path::new(fixture), dir.path());
        Self { dir }
    }

    pub fn game() -> Self {
        Self::new(GAME_FIXTURE)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn generated(&self) -> PathBuf {
        self.path("generated")
    }

    pub fn record(&self) -> PathBuf {
        self.path("caches/previously_generated_files.txt")
    }

    /// Arguments that run nothing yet, rooted at this workspace.
    pub fn args(&self) -> Args {
        Args {
            validate_all: false,
            generator: None,
            group: None,
            quiet: false,
            dry_run: false,
            caches_dir: None,
            working_dir: Some(self.root().to_path_buf()),
            config: None,
            verbose: 2,
        }
    }

    pub fn generator_args(&self, generator: &str) -> Args {
        Args { generator: Some(generator.to_string()), ..self.args() }
    }

    pub fn group_args(&self, group: &str) -> Args {
        Args { group: Some(group.to_string()), ..self.args() }
    }
}

/// Runs the generator with `args`, returning the report and the trace.
pub fn run_captured(args: Args) -> (Result<RunReport>, String) {
    let mut out = Vec::new();
    let result = Runner::new(args).run_with_output(&mut out);
    (result, String::from_utf8(out).unwrap())
}

/// Runs the generator with `args` and panics on failure.
pub fn run_ok(args: Args) -> (RunReport, String) {
    let (result, trace) = run_captured(args);
    match result {
        Ok(report) => (report, trace),
        Err(e) => panic!("run failed: {e}\ntrace:\n{trace}"),
    }
}

/// Modification times of every file under `root`, by path.
pub fn modification_times(root: &Path) -> Vec<(PathBuf, std::time::SystemTime)> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| (e.path().to_path_buf(), e.metadata().unwrap().modified().unwrap()))
        .collect()
}

/// Pushes the modification time of every file under `root` one hour back.
pub fn age_files(root: &Path) {
    let past = std::time::SystemTime::now() - std::time::Duration::from_secs(3600);
    for entry in WalkDir::new(root).into_iter().filter_map(std::result::Result::ok) {
        if entry.file_type().is_file() {
            let file = fs::OpenOptions::new().write(true).open(entry.path()).unwrap();
            file.set_modified(past).unwrap();
        }
    }
}
