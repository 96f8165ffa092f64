use crate::error::Result;
use crate::ext::PathExt;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::Path;

/// Default patterns to always skip while scanning sources
const DEFAULT_EXCLUDE_PATTERNS: &[&str] =
    &[".git/**", ".git", ".hg/**", ".hg", ".svn/**", ".svn", "**/.DS_Store"];

/// Builds the set of excluded paths of a source scan.
///
/// Patterns are relative to `root`; the defaults always apply and
/// `patterns` adds to them.
pub fn build_exclude_set<P: AsRef<Path>, S: AsRef<str>>(
    root: P,
    patterns: &[S],
) -> Result<GlobSet> {
    let root = root.as_ref();
    let mut builder = GlobSetBuilder::new();

    let patterns = DEFAULT_EXCLUDE_PATTERNS
        .iter()
        .copied()
        .chain(patterns.iter().map(AsRef::as_ref))
        .map(str::trim)
        .filter(|pattern| !pattern.is_empty() && !pattern.starts_with('#'));

    for pattern in patterns {
        let pattern = root.join(pattern);
        let pattern = pattern.to_str_checked()?;
        debug!("Adding exclude pattern: {pattern} to globset");
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}
