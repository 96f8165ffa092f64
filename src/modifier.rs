//! Declarative string modifiers.
//!
//! A chain is written in configuration as an ordered list such as
//! `["modifier:to_lower", "modifier:remove_suffix(health)"]` and is applied
//! left to right.

use crate::constants::MODIFIER_PREFIX;
use crate::error::{Error, Result};
use cruet::case::{pascal::to_pascal_case, snake::to_snake_case};
use serde::Deserialize;

/// Maximum number of arguments a modifier accepts.
const MAX_ARITY: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    ToLower,
    ToUpper,
    LowerFirst,
    SnakeCase,
    PascalCase,
    /// Strips the trailing literal if present.
    RemoveSuffix(String),
}

impl Modifier {
    /// Parses one chain entry, e.g. `modifier:lower_first` or
    /// `modifier:remove_suffix(Component)`.
    pub fn parse(entry: &str) -> Result<Self> {
        let Some(body) = entry.strip_prefix(MODIFIER_PREFIX) else {
            return Err(Error::MalformedModifier { modifier: entry.to_string() });
        };

        let (name, arguments) = match body.find('(') {
            Some(start) => {
                let Some(inner) = body[start + 1..].strip_suffix(')') else {
                    return Err(Error::MalformedModifier { modifier: entry.to_string() });
                };
                let arguments: Vec<String> = if inner.trim().is_empty() {
                    Vec::new()
                } else {
                    inner.split(',').map(|arg| arg.trim().to_string()).collect()
                };
                (&body[..start], arguments)
            }
            None if body.ends_with(')') => {
                return Err(Error::MalformedModifier { modifier: entry.to_string() });
            }
            None => (body, Vec::new()),
        };

        if arguments.len() > MAX_ARITY {
            return Err(Error::TooManyModifierArguments { modifier: entry.to_string() });
        }

        let modifier = match (name, arguments.as_slice()) {
            ("to_lower", []) => Modifier::ToLower,
            ("to_upper", []) => Modifier::ToUpper,
            ("lower_first", []) => Modifier::LowerFirst,
            ("snake_case", []) => Modifier::SnakeCase,
            ("pascal_case", []) => Modifier::PascalCase,
            ("remove_suffix", [suffix]) => Modifier::RemoveSuffix(suffix.clone()),
            _ => {
                return Err(Error::UnknownModifier {
                    name: name.to_string(),
                    arity: arguments.len(),
                })
            }
        };
        Ok(modifier)
    }

    pub fn apply(&self, value: &str) -> String {
        match self {
            Modifier::ToLower => value.to_lowercase(),
            Modifier::ToUpper => value.to_uppercase(),
            Modifier::LowerFirst => {
                let mut chars = value.chars();
                match chars.next() {
                    Some(first) => first.to_lowercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            Modifier::SnakeCase => to_snake_case(value),
            Modifier::PascalCase => to_pascal_case(value),
            Modifier::RemoveSuffix(suffix) => {
                value.strip_suffix(suffix.as_str()).unwrap_or(value).to_string()
            }
        }
    }
}

/// Ordered composition of modifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct ModifierChain {
    modifiers: Vec<Modifier>,
}

impl ModifierChain {
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let modifiers = entries
            .iter()
            .map(|entry| Modifier::parse(entry.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { modifiers })
    }

    pub fn apply(&self, value: &str) -> String {
        self.modifiers
            .iter()
            .fold(value.to_string(), |current, modifier| modifier.apply(&current))
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }
}

impl TryFrom<Vec<String>> for ModifierChain {
    type Error = Error;

    fn try_from(entries: Vec<String>) -> Result<Self> {
        ModifierChain::parse(&entries)
    }
}
