//! Gathering of interned string literals and their 64-bit fingerprints.
//!
//! Sources call `STR_TO_ID("literal")`; every literal found is fingerprinted
//! with FNV-1a so generated code can map ids back to text. Two literals with
//! the same fingerprint abort generation.

use crate::constants::fnv;
use crate::description::Entity;
use crate::dictionary::PlaceholderDictionary;
use crate::error::{Error, Result};
use globset::GlobSet;
use indexmap::IndexSet;
use log::{debug, trace};
use regex::Regex;
use std::path::Path;
use walkdir::WalkDir;

/// 64-bit FNV-1a hash of the UTF-8 bytes of `text`.
pub fn fingerprint(text: &str) -> u64 {
    let mut hash = fnv::OFFSET_BASIS;
    for byte in text.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(fnv::PRIME);
    }
    hash
}

/// An interned literal with its fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub text: String,
    pub hash: u64,
}

impl StringLiteral {
    pub fn new<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        let hash = fingerprint(&text);
        Self { text, hash }
    }

    /// The literal as a description without elements.
    pub fn to_entity(&self) -> Entity {
        let mut dictionary = PlaceholderDictionary::new();
        dictionary.insert("string_text", self.text.as_str());
        dictionary.insert("string_hash", self.hash.to_string());
        dictionary.insert("string_hash_hex", format!("{:#018x}", self.hash));
        Entity::new(self.text.as_str(), dictionary)
    }
}

/// Extracts capture group 1 of `pattern` from every file under
/// `sources_dir`, walking in file name order and skipping excluded paths.
///
/// Literals are returned once each, in first-seen order. Files that are not
/// valid UTF-8 are skipped.
pub fn gather_literals<P: AsRef<Path>>(
    sources_dir: P,
    pattern: &Regex,
    exclude: &GlobSet,
) -> Result<Vec<String>> {
    let sources_dir = sources_dir.as_ref();
    let mut literals = IndexSet::new();

    let walker = WalkDir::new(sources_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !exclude.is_match(entry.path()));
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(content) = std::fs::read_to_string(entry.path()) else {
            debug!("Skipping unreadable or non UTF-8 file {}", entry.path().display());
            continue;
        };
        for captures in pattern.captures_iter(&content) {
            if let Some(literal) = captures.get(1) {
                trace!("Found literal \"{}\" in {}", literal.as_str(), entry.path().display());
                literals.insert(literal.as_str().to_string());
            }
        }
    }
    Ok(literals.into_iter().collect())
}

/// Fingerprints the literals and sorts them by fingerprint.
///
/// Fails on the first pair of distinct literals that share a fingerprint.
pub fn intern<I, S>(literals: I) -> Result<Vec<StringLiteral>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut table: Vec<StringLiteral> = literals.into_iter().map(StringLiteral::new).collect();
    table.sort_by_key(|literal| literal.hash);
    detect_collisions(&table)?;
    Ok(table)
}

/// Checks a table sorted by fingerprint for collisions.
pub fn detect_collisions(table: &[StringLiteral]) -> Result<()> {
    for pair in table.windows(2) {
        let (first, second) = (&pair[0], &pair[1]);
        if first.hash == second.hash && first.text != second.text {
            return Err(Error::HashCollision {
                first: first.text.clone(),
                second: second.text.clone(),
                hash: first.hash,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_STRING_LITERAL_PATTERN;
    use crate::ignore::build_exclude_set;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn fingerprint_reference_values() {
        assert_eq!(fingerprint(""), 0xcbf29ce484222325);
        assert_eq!(fingerprint("a"), 0xaf63dc4c8601ec8c);
        assert_eq!(fingerprint("foobar"), 0x85944171f73967e8);
    }

    #[test]
    fn sorts_by_fingerprint() {
        let table = intern(["foobar", "a", ""]).unwrap();
        let hashes: Vec<u64> = table.iter().map(|literal| literal.hash).collect();
        let mut sorted = hashes.clone();
        sorted.sort();
        assert_eq!(hashes, sorted);
    }

    #[test]
    fn collision_is_reported_with_both_literals() {
        let table = vec![
            StringLiteral { text: "first".into(), hash: 42 },
            StringLiteral { text: "second".into(), hash: 42 },
        ];
        let err = detect_collisions(&table).unwrap_err();
        assert_eq!(err.to_string(), "Hash collision between first and second: 42");
    }

    #[test]
    fn entity_dictionary() {
        let entity = StringLiteral::new("a").to_entity();
        assert_eq!(entity.dictionary.get_text("string_text"), Some("a"));
        assert_eq!(entity.dictionary.get_text("string_hash"), Some("12638187200555641996"));
        assert_eq!(entity.dictionary.get_text("string_hash_hex"), Some("0xaf63dc4c8601ec8c"));
    }

    #[test]
    fn gathers_unique_literals_in_walk_order() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("b")).unwrap();
        fs::write(
            dir.path().join("a.cpp"),
            r#"auto x = STR_TO_ID("player"); f(STR_TO_ID( "enemy" ));"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("b").join("c.cpp"),
            r#"g(STR_TO_ID("player"), STR_TO_ID("wall"));"#,
        )
        .unwrap();
        fs::write(dir.path().join("binary.bin"), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(dir.path().join("nomatch.cpp"), r#"xSTR_TO_ID("hidden")"#).unwrap();

        let pattern = Regex::new(DEFAULT_STRING_LITERAL_PATTERN).unwrap();
        let exclude = build_exclude_set::<_, &str>(dir.path(), &[]).unwrap();
        let literals = gather_literals(dir.path(), &pattern, &exclude).unwrap();
        assert_eq!(literals, vec!["player", "enemy", "wall"]);
    }

    #[test]
    fn excluded_directories_are_not_scanned() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("generated")).unwrap();
        fs::write(dir.path().join("generated").join("ids.cpp"), r#" STR_TO_ID("skipped")"#)
            .unwrap();
        fs::write(dir.path().join("main.cpp"), r#" STR_TO_ID("kept")"#).unwrap();

        let pattern = Regex::new(DEFAULT_STRING_LITERAL_PATTERN).unwrap();
        let exclude = build_exclude_set(dir.path(), &["generated"]).unwrap();
        let literals = gather_literals(dir.path(), &pattern, &exclude).unwrap();
        assert_eq!(literals, vec!["kept"]);
    }
}
