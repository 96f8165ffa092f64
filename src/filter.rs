//! Flag based filtering of descriptions and their elements.

use crate::config::types::{AggregateTemplate, TemplateParam};
use crate::dictionary::PlaceholderDictionary;
use crate::error::{Error, Result};
use serde::Deserialize;

/// Whitelist/blacklist over flags.
///
/// A blacklisted element is never re-admitted by the whitelist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FlagFilter {
    #[serde(default)]
    pub whitelist: Option<Vec<String>>,
    #[serde(default)]
    pub blacklist: Option<Vec<String>>,
}

fn intersects(flags: &[String], list: &[String]) -> bool {
    flags.iter().any(|flag| list.contains(flag))
}

impl FlagFilter {
    pub fn is_blacklisted(&self, flags: &[String]) -> bool {
        self.blacklist.as_deref().is_some_and(|blacklist| intersects(flags, blacklist))
    }

    /// True when no whitelist is configured or a flag is on it.
    pub fn is_whitelisted(&self, flags: &[String]) -> bool {
        self.whitelist.as_deref().map_or(true, |whitelist| intersects(flags, whitelist))
    }

    pub fn passes(&self, flags: &[String]) -> bool {
        !self.is_blacklisted(flags) && self.is_whitelisted(flags)
    }
}

/// Decides whether an element takes part in an aggregate template.
///
/// Predicates run in order and stop at the first failure: the `not_empty`
/// check on the template's test field, then the blacklist, then the
/// whitelist.
pub fn accepts(
    template: &AggregateTemplate,
    owner: &str,
    flags: &[String],
    dictionary: &PlaceholderDictionary,
) -> Result<bool> {
    if template.has_param(TemplateParam::NotEmpty) {
        let field = template.value_to_empty_test.as_deref().ok_or_else(|| {
            Error::ConfigValidation(format!(
                "template '{}' uses 'not_empty' without 'value_to_empty_test'",
                template.name
            ))
        })?;
        let value = dictionary.get(field).ok_or_else(|| Error::MissingField {
            description: owner.to_string(),
            field: field.to_string(),
        })?;
        if value.is_empty() {
            return Ok(false);
        }
    }
    Ok(template.filter.passes(flags))
}
