//! Per-kind generator pipelines
//!
//! A generator is prepared in two steps: [`GeneratorContext::load`] reads its
//! configuration bundle and templates, then [`plan`] loads its entities and
//! renders every output file in memory.

pub mod components;
pub mod enums;
pub mod interface;
pub mod schema;
pub mod string_ids;

use crate::config::{GeneratorBundle, GeneratorConfig, GeneratorKind, GeneratorPaths};
use crate::description::{load_descriptions, RawDescription};
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::template::{GenerateOperation, TemplateProcessor, TemplateStore};
use crate::validation::DescriptionValidator;
use log::{debug, info};
use std::path::Path;

use components::ComponentsGenerator;
use enums::EnumsGenerator;
use interface::EntitySource;
use schema::SchemaGenerator;
use string_ids::StringIdsGenerator;

/// Everything a generator needs, loaded from disk.
#[derive(Debug)]
pub struct GeneratorContext {
    pub id: String,
    pub config: GeneratorConfig,
    pub paths: GeneratorPaths,
    pub bundle: GeneratorBundle,
    pub templates: TemplateStore,
    validator: Option<DescriptionValidator>,
}

impl GeneratorContext {
    /// Loads the bundle and preloads every referenced template.
    pub fn load<P: AsRef<Path>>(
        id: &str,
        config: &GeneratorConfig,
        working_dir: P,
    ) -> Result<Self> {
        let paths = config.resolve(working_dir);
        if !paths.configs_dir.is_dir() {
            return Err(Error::ConfigValidation(format!(
                "configs directory '{}' does not exist",
                paths.configs_dir.display()
            )));
        }

        let bundle = GeneratorBundle::load(&paths.configs_dir)?;
        let validator =
            bundle.description_schema.as_ref().map(DescriptionValidator::new).transpose()?;

        let mut templates = TemplateStore::new(&paths.templates_dir);
        templates.preload(bundle.template_names())?;
        debug!("Generator '{}' uses {} templates", id, templates.len());

        Ok(Self { id: id.to_string(), config: config.clone(), paths, bundle, templates, validator })
    }

    /// Reads the descriptions of the generator in file name order.
    pub fn descriptions(&self) -> Result<Vec<RawDescription>> {
        let descriptions_dir = self.paths.descriptions_dir.as_ref().ok_or_else(|| {
            Error::ConfigValidation(format!("generator '{}' requires 'descriptions_dir'", self.id))
        })?;
        load_descriptions(descriptions_dir, self.validator.as_ref())
    }

    fn entity_source(&self) -> Box<dyn EntitySource> {
        match self.config.kind {
            GeneratorKind::Components => Box::new(ComponentsGenerator),
            GeneratorKind::Enums => Box::new(EnumsGenerator),
            GeneratorKind::StringIds => Box::new(StringIdsGenerator),
            GeneratorKind::Schema => Box::new(SchemaGenerator),
        }
    }

    /// Loads the entities and renders every output file.
    pub fn plan(&self, engine: &dyn TemplateRenderer) -> Result<Vec<GenerateOperation>> {
        let entities = self.entity_source().load_entities(self)?;
        info!("Generator '{}' loaded {} entities", self.id, entities.len());

        let processor = TemplateProcessor::new(
            engine,
            &self.templates,
            &self.bundle,
            &self.paths.output_dir_base,
        );
        processor.process(&entities)
    }
}

/// The planned output of one generator.
#[derive(Debug)]
pub struct GeneratorPlan {
    pub id: String,
    pub operations: Vec<GenerateOperation>,
}

/// Loads and plans a generator, naming it in any error.
pub fn plan<P: AsRef<Path>>(
    id: &str,
    config: &GeneratorConfig,
    working_dir: P,
    engine: &dyn TemplateRenderer,
) -> Result<GeneratorPlan> {
    let operations = GeneratorContext::load(id, config, working_dir)
        .and_then(|context| context.plan(engine))
        .map_err(|e| e.in_generator(id))?;
    Ok(GeneratorPlan { id: id.to_string(), operations })
}
