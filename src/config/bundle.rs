//! Loading of a generator's configuration bundle from its configs directory

use crate::config::schema::SchemaConfiguration;
use crate::config::types::{AggregateTemplate, FileToGenerate, GenerationMode};
use crate::constants::bundle;
use crate::dictionary::PlaceholderDictionary;
use crate::error::Result;
use crate::ioutils::{load_json, load_optional_json};
use indexmap::IndexMap;
use log::debug;
use std::path::Path;

/// Everything a generator reads from its configs directory.
#[derive(Debug, Clone, Default)]
pub struct GeneratorBundle {
    /// Delimiter placeholder name -> separator value.
    pub delimiters: IndexMap<String, String>,
    /// Templates aggregated over the elements of one description.
    pub attribute_templates: Vec<AggregateTemplate>,
    /// Templates aggregated over all descriptions.
    pub list_templates: Vec<AggregateTemplate>,
    pub files_to_generate: Vec<FileToGenerate>,
    /// Attribute field -> default value for attributes that omit it.
    pub attribute_optional_fields: IndexMap<String, serde_json::Value>,
    /// JSON Schema every description must satisfy.
    pub description_schema: Option<serde_json::Value>,
    pub schema_configuration: Option<SchemaConfiguration>,
}

impl GeneratorBundle {
    pub fn load<P: AsRef<Path>>(configs_dir: P) -> Result<Self> {
        let configs_dir = configs_dir.as_ref();
        debug!("Loading generator configuration from {}", configs_dir.display());

        let delimiters = load_json(configs_dir.join(bundle::DELIMITER_DICTIONARY))?;
        let files_to_generate = load_json(configs_dir.join(bundle::FILES_TO_GENERATE))?;
        let attribute_templates =
            load_optional_json(configs_dir.join(bundle::ATTRIBUTE_TEMPLATES))?.unwrap_or_default();
        let component_templates =
            load_optional_json(configs_dir.join(bundle::COMPONENT_TEMPLATES))?;
        let list_templates = match component_templates {
            Some(templates) => templates,
            None => load_optional_json(configs_dir.join(bundle::ELEMENT_TEMPLATES))?
                .unwrap_or_default(),
        };
        let attribute_optional_fields =
            load_optional_json(configs_dir.join(bundle::ATTRIBUTE_OPTIONAL_FIELDS))?
                .unwrap_or_default();
        let description_schema =
            load_optional_json(configs_dir.join(bundle::DESCRIPTION_SCHEMA))?;
        let schema_configuration =
            load_optional_json(configs_dir.join(bundle::GENERATOR_CONFIGURATION))?;

        let bundle = Self {
            delimiters,
            attribute_templates,
            list_templates,
            files_to_generate,
            attribute_optional_fields,
            description_schema,
            schema_configuration,
        };
        bundle.validate()?;
        Ok(bundle)
    }

    pub fn validate(&self) -> Result<()> {
        for template in self.attribute_templates.iter().chain(&self.list_templates) {
            template.validate()?;
        }
        for file in &self.files_to_generate {
            file.validate()?;
        }
        if let Some(schema_configuration) = &self.schema_configuration {
            schema_configuration.validate()?;
        }
        Ok(())
    }

    /// Names of every template the bundle refers to, without duplicates.
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        let referenced = self
            .attribute_templates
            .iter()
            .chain(&self.list_templates)
            .map(|template| template.name.as_str())
            .chain(self.files_to_generate.iter().map(|file| file.template.as_str()));
        for name in referenced {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Delimiter dictionary used for every element but the last one.
    pub fn delimiter_dictionary(&self) -> PlaceholderDictionary {
        self.delimiters.iter().map(|(key, value)| (key.as_str(), value.as_str())).collect()
    }

    /// Delimiter dictionary with every delimiter bound to the empty string.
    pub fn empty_delimiter_dictionary(&self) -> PlaceholderDictionary {
        self.delimiters.keys().map(|key| (key.as_str(), "")).collect()
    }

    pub fn files_with_mode(&self, mode: GenerationMode) -> impl Iterator<Item = &FileToGenerate> {
        self.files_to_generate.iter().filter(move |file| file.mode() == mode)
    }
}
