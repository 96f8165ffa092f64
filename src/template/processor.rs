use std::path::Path;

use crate::config::types::{FileToGenerate, GenerationMode};
use crate::config::GeneratorBundle;
use crate::description::Entity;
use crate::dictionary::PlaceholderDictionary;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;

use super::aggregate::{AggregateItem, Aggregator};
use super::operation::GenerateOperation;
use super::store::TemplateStore;

/// Plans the files a generator produces for a set of entities.
///
/// Planning renders every file in memory and touches nothing on disk, so a
/// run can be validated completely before anything is written.
pub struct TemplateProcessor<'a> {
    /// Dependencies
    engine: &'a dyn TemplateRenderer,
    templates: &'a TemplateStore,
    bundle: &'a GeneratorBundle,

    /// Other
    output_dir_base: &'a Path,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        templates: &'a TemplateStore,
        bundle: &'a GeneratorBundle,
        output_dir_base: &'a Path,
    ) -> Self {
        Self { engine, templates, bundle, output_dir_base }
    }

    fn aggregator(&self) -> Aggregator<'a> {
        Aggregator::new(
            self.engine,
            self.bundle.delimiter_dictionary(),
            self.bundle.empty_delimiter_dictionary(),
        )
    }

    /// Builds the full dictionary of an entity: its identity placeholders
    /// plus one aggregate per attribute template, stored under the
    /// template's name.
    ///
    /// Aggregates are computed in configuration order and each one is
    /// visible to the templates after it.
    pub fn full_dictionary(&self, entity: &Entity) -> Result<PlaceholderDictionary> {
        let aggregator = self.aggregator();
        let mut dictionary = entity.dictionary.clone();
        for config in &self.bundle.attribute_templates {
            let template = self.templates.get(&config.name)?;
            let items: Vec<AggregateItem<'_>> = entity
                .elements
                .iter()
                .map(|element| AggregateItem {
                    owner: &entity.name,
                    flags: &element.flags,
                    layers: vec![&dictionary, &element.dictionary],
                })
                .collect();
            let content = aggregator.aggregate(template, config, &items)?;
            dictionary.insert(config.name.as_str(), content);
        }
        Ok(dictionary)
    }

    /// Renders one output file: the content from its template and the
    /// target path from its name template.
    ///
    /// # Arguments
    /// * `file` - The output plan entry
    /// * `dictionary` - Placeholders for both the content and the file name
    ///
    /// # Returns
    /// * `Result<GenerateOperation>` - The file to write
    ///
    fn render_file(
        &self,
        file: &FileToGenerate,
        dictionary: &PlaceholderDictionary,
    ) -> Result<GenerateOperation> {
        let template = self.templates.get(&file.template)?;
        let content = self.engine.render(template, dictionary)?;
        let file_name =
            self.engine.render_str(&file.name_template, &file.name_template, dictionary)?;
        if file_name.is_empty() {
            return Err(Error::ConfigValidation(format!(
                "name template '{}' of template '{}' renders an empty file name",
                file.name_template, file.template
            )));
        }

        let target = self.output_dir_base.join(&file.output_dir).join(file_name);
        Ok(GenerateOperation::new(file.template.as_str(), target, content))
    }

    /// Fills every list template across all entities.
    fn list_dictionary(
        &self,
        entities: &[Entity],
        dictionaries: &[PlaceholderDictionary],
    ) -> Result<PlaceholderDictionary> {
        let aggregator = self.aggregator();
        let items: Vec<AggregateItem<'_>> = entities
            .iter()
            .zip(dictionaries)
            .map(|(entity, dictionary)| AggregateItem {
                owner: &entity.name,
                flags: &entity.flags,
                layers: vec![dictionary],
            })
            .collect();

        let mut result = PlaceholderDictionary::new();
        for config in &self.bundle.list_templates {
            let template = self.templates.get(&config.name)?;
            result.insert(config.name.as_str(), aggregator.aggregate(template, config, &items)?);
        }
        Ok(result)
    }

    /// Fills every attribute template across the elements of all entities.
    fn attribute_list_dictionary(
        &self,
        entities: &[Entity],
        dictionaries: &[PlaceholderDictionary],
    ) -> Result<PlaceholderDictionary> {
        let aggregator = self.aggregator();
        let items: Vec<AggregateItem<'_>> = entities
            .iter()
            .zip(dictionaries)
            .flat_map(|(entity, dictionary)| {
                entity.elements.iter().map(move |element| AggregateItem {
                    owner: &entity.name,
                    flags: &element.flags,
                    layers: vec![dictionary, &element.dictionary],
                })
            })
            .collect();

        let mut result = PlaceholderDictionary::new();
        for config in &self.bundle.attribute_templates {
            let template = self.templates.get(&config.name)?;
            result.insert(config.name.as_str(), aggregator.aggregate(template, config, &items)?);
        }
        Ok(result)
    }

    /// Plans every file of the output plan.
    ///
    /// Per-description and per-attribute files come first, entity by entity,
    /// followed by list files and attribute list files.
    ///
    /// # Arguments
    /// * `entities` - Entities in processing order
    ///
    /// # Returns
    /// * `Result<Vec<GenerateOperation>>` - Files to write, in order
    ///
    pub fn process(&self, entities: &[Entity]) -> Result<Vec<GenerateOperation>> {
        let dictionaries = entities
            .iter()
            .map(|entity| self.full_dictionary(entity))
            .collect::<Result<Vec<_>>>()?;

        let mut operations = Vec::new();
        for (entity, dictionary) in entities.iter().zip(&dictionaries) {
            for file in &self.bundle.files_to_generate {
                match file.mode() {
                    GenerationMode::PerDescription => {
                        if file.filter.passes(&entity.flags) {
                            operations.push(self.render_file(file, dictionary)?);
                        }
                    }
                    GenerationMode::PerAttribute => {
                        for element in &entity.elements {
                            if file.filter.passes(&element.flags) {
                                let element_dictionary = PlaceholderDictionary::layered(&[
                                    dictionary,
                                    &element.dictionary,
                                ]);
                                operations.push(self.render_file(file, &element_dictionary)?);
                            }
                        }
                    }
                    GenerationMode::List | GenerationMode::AttributeList => {}
                }
            }
        }

        if self.bundle.files_with_mode(GenerationMode::List).next().is_some() {
            let list_dictionary = self.list_dictionary(entities, &dictionaries)?;
            for file in self.bundle.files_with_mode(GenerationMode::List) {
                operations.push(self.render_file(file, &list_dictionary)?);
            }
        }

        if self.bundle.files_with_mode(GenerationMode::AttributeList).next().is_some() {
            let attribute_list_dictionary =
                self.attribute_list_dictionary(entities, &dictionaries)?;
            for file in self.bundle.files_with_mode(GenerationMode::AttributeList) {
                operations.push(self.render_file(file, &attribute_list_dictionary)?);
            }
        }

        Ok(operations)
    }
}
