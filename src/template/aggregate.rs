//! Concatenation of one template over many elements.

use crate::config::types::{AggregateTemplate, TemplateParam};
use crate::dictionary::PlaceholderDictionary;
use crate::error::Result;
use crate::filter::accepts;
use crate::renderer::{Template, TemplateRenderer};
use indexmap::IndexSet;

/// One element taking part in an aggregate.
#[derive(Debug)]
pub struct AggregateItem<'a> {
    /// Name reported when a filtered field is missing.
    pub owner: &'a str,
    pub flags: &'a [String],
    /// Dictionaries merged in order, later ones taking precedence.
    pub layers: Vec<&'a PlaceholderDictionary>,
}

pub struct Aggregator<'a> {
    engine: &'a dyn TemplateRenderer,
    delimiters: PlaceholderDictionary,
    empty_delimiters: PlaceholderDictionary,
}

impl<'a> Aggregator<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        delimiters: PlaceholderDictionary,
        empty_delimiters: PlaceholderDictionary,
    ) -> Self {
        Self { engine, delimiters, empty_delimiters }
    }

    /// Renders `template` once per accepted item and concatenates the results.
    ///
    /// Delimiter placeholders carry their configured value for every item but
    /// the last accepted one, which gets empty strings.
    pub fn aggregate(
        &self,
        template: &Template,
        config: &AggregateTemplate,
        items: &[AggregateItem<'_>],
    ) -> Result<String> {
        let mut accepted = Vec::with_capacity(items.len());
        for item in items {
            let dictionary = PlaceholderDictionary::layered(&item.layers);
            if accepts(config, item.owner, item.flags, &dictionary)? {
                accepted.push(dictionary);
            }
        }

        let last = accepted.len().saturating_sub(1);
        let mut content = String::new();
        for (index, mut dictionary) in accepted.into_iter().enumerate() {
            if index == last {
                dictionary.merge(&self.empty_delimiters);
            } else {
                dictionary.merge(&self.delimiters);
            }
            content.push_str(&self.engine.render(template, &dictionary)?);
        }

        Ok(post_process(content, config))
    }
}

/// Applies `remove_duplicates` then `sort` to the lines of an aggregate.
pub fn post_process(content: String, config: &AggregateTemplate) -> String {
    let remove_duplicates = config.has_param(TemplateParam::RemoveDuplicates);
    let sort = config.has_param(TemplateParam::Sort);
    if !remove_duplicates && !sort {
        return content;
    }

    let mut lines: Vec<&str> = content.split('\n').collect();
    if remove_duplicates {
        let unique: IndexSet<&str> = lines.into_iter().collect();
        lines = unique.into_iter().collect();
    }
    if sort {
        lines.sort_unstable();
    }
    lines.join("\n")
}
