use crate::constants::DEFAULT_STRING_LITERAL_PATTERN;
use crate::description::Entity;
use crate::error::{Error, Result};
use crate::generators::{interface::EntitySource, GeneratorContext};
use crate::ignore::build_exclude_set;
use crate::interning::{gather_literals, intern};
use log::debug;
use regex::Regex;

/// Interned string literals found in the sources, ordered by fingerprint.
pub struct StringIdsGenerator;

impl EntitySource for StringIdsGenerator {
    fn load_entities(&self, context: &GeneratorContext) -> Result<Vec<Entity>> {
        let sources_dir = &context.paths.sources_dir;
        if !sources_dir.is_dir() {
            return Err(Error::ConfigValidation(format!(
                "sources directory '{}' does not exist",
                sources_dir.display()
            )));
        }

        let pattern = context
            .config
            .string_literal_pattern
            .as_deref()
            .unwrap_or(DEFAULT_STRING_LITERAL_PATTERN);
        let pattern = Regex::new(pattern)?;
        if pattern.captures_len() < 2 {
            return Err(Error::ConfigValidation(format!(
                "string literal pattern '{pattern}' has no capture group"
            )));
        }
        let exclude = build_exclude_set(sources_dir, &context.config.exclude)?;

        let literals = gather_literals(sources_dir, &pattern, &exclude)?;
        debug!("Found {} unique string literals in {}", literals.len(), sources_dir.display());
        Ok(intern(literals)?.iter().map(|literal| literal.to_entity()).collect())
    }
}
