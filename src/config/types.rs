//! Typed entries of a generator configuration bundle

use crate::error::{Error, Result};
use crate::filter::FlagFilter;
use serde::Deserialize;

/// Post-processing and filtering switches of an aggregate template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateParam {
    /// Skip elements whose `value_to_empty_test` field is empty.
    NotEmpty,
    /// Collapse the output to unique lines.
    RemoveDuplicates,
    /// Sort the output lines.
    Sort,
}

/// A template instantiated once per element and concatenated.
///
/// Written in configuration either as a bare template name or as an object:
/// `{"name": "...", "params": [...], "whitelist": [...], "blacklist": [...],
/// "value_to_empty_test": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "AggregateTemplateEntry")]
pub struct AggregateTemplate {
    pub name: String,
    pub params: Vec<TemplateParam>,
    pub filter: FlagFilter,
    pub value_to_empty_test: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AggregateTemplateEntry {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        params: Vec<TemplateParam>,
        #[serde(flatten)]
        filter: FlagFilter,
        #[serde(default)]
        value_to_empty_test: Option<String>,
    },
}

impl From<AggregateTemplateEntry> for AggregateTemplate {
    fn from(entry: AggregateTemplateEntry) -> Self {
        match entry {
            AggregateTemplateEntry::Name(name) => AggregateTemplate {
                name,
                params: Vec::new(),
                filter: FlagFilter::default(),
                value_to_empty_test: None,
            },
            AggregateTemplateEntry::Full { name, params, filter, value_to_empty_test } => {
                AggregateTemplate { name, params, filter, value_to_empty_test }
            }
        }
    }
}

impl AggregateTemplate {
    pub fn named<S: Into<String>>(name: S) -> Self {
        AggregateTemplateEntry::Name(name.into()).into()
    }

    pub fn has_param(&self, param: TemplateParam) -> bool {
        self.params.contains(&param)
    }

    pub fn validate(&self) -> Result<()> {
        if self.has_param(TemplateParam::NotEmpty) && self.value_to_empty_test.is_none() {
            return Err(Error::ConfigValidation(format!(
                "template '{}' uses 'not_empty' without 'value_to_empty_test'",
                self.name
            )));
        }
        Ok(())
    }
}

/// Generation mode switches of an output file entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileFlag {
    PerAttribute,
    List,
    AttributeList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// One file per description.
    PerDescription,
    /// One file per element of every description.
    PerAttribute,
    /// One file filled with the list templates across all descriptions.
    List,
    /// One file filled with the attribute templates across all elements.
    AttributeList,
}

/// One entry of `files_to_generate.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileToGenerate {
    pub template: String,
    /// Destination directory relative to the generator's output base.
    pub output_dir: String,
    /// File name, itself a template filled from the same dictionary.
    pub name_template: String,
    #[serde(default)]
    pub flags: Vec<FileFlag>,
    #[serde(flatten)]
    pub filter: FlagFilter,
}

impl FileToGenerate {
    pub fn mode(&self) -> GenerationMode {
        if self.flags.contains(&FileFlag::PerAttribute) {
            GenerationMode::PerAttribute
        } else if self.flags.contains(&FileFlag::AttributeList) {
            GenerationMode::AttributeList
        } else if self.flags.contains(&FileFlag::List) {
            GenerationMode::List
        } else {
            GenerationMode::PerDescription
        }
    }

    /// List files are rendered once from aggregates, so a flag filter has
    /// nothing to select and is rejected.
    pub fn validate(&self) -> Result<()> {
        let aggregated =
            matches!(self.mode(), GenerationMode::List | GenerationMode::AttributeList);
        if aggregated && (self.filter.whitelist.is_some() || self.filter.blacklist.is_some()) {
            return Err(Error::ConfigValidation(format!(
                "file '{}' is a list file and cannot use 'whitelist' or 'blacklist'; \
                 filter its aggregate templates instead",
                self.template
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_template_from_name() {
        let template: AggregateTemplate = serde_json::from_str(r#""enum_value_line""#).unwrap();
        assert_eq!(template, AggregateTemplate::named("enum_value_line"));
        assert!(template.params.is_empty());
    }

    #[test]
    fn aggregate_template_from_object() {
        let template: AggregateTemplate = serde_json::from_str(
            r#"{"name": "includes", "params": ["remove_duplicates", "sort"], "blacklist": ["internal"]}"#,
        )
        .unwrap();
        assert_eq!(template.name, "includes");
        assert!(template.has_param(TemplateParam::Sort));
        assert!(template.has_param(TemplateParam::RemoveDuplicates));
        assert_eq!(template.filter.blacklist, Some(vec!["internal".to_string()]));
        assert!(template.filter.whitelist.is_none());
    }

    #[test]
    fn not_empty_requires_test_field() {
        let template: AggregateTemplate =
            serde_json::from_str(r#"{"name": "defaults", "params": ["not_empty"]}"#).unwrap();
        assert!(matches!(template.validate(), Err(Error::ConfigValidation(_))));
    }

    #[test]
    fn unknown_param_is_rejected() {
        let result =
            serde_json::from_str::<AggregateTemplate>(r#"{"name": "x", "params": ["shuffle"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn file_modes() {
        let file: FileToGenerate = serde_json::from_str(
            r#"{"template": "t", "output_dir": "gen", "name_template": "{class_name}.h"}"#,
        )
        .unwrap();
        assert_eq!(file.mode(), GenerationMode::PerDescription);

        let file: FileToGenerate = serde_json::from_str(
            r#"{"template": "t", "output_dir": "gen", "name_template": "a.h", "flags": ["list"], "whitelist": ["network"]}"#,
        )
        .unwrap();
        assert_eq!(file.mode(), GenerationMode::List);
        assert_eq!(file.filter.whitelist, Some(vec!["network".to_string()]));

        let file: FileToGenerate = serde_json::from_str(
            r#"{"template": "t", "output_dir": "gen", "name_template": "a.h", "flags": ["per_attribute"]}"#,
        )
        .unwrap();
        assert_eq!(file.mode(), GenerationMode::PerAttribute);
    }
}
