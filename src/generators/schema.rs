use crate::constants::bundle::GENERATOR_CONFIGURATION;
use crate::description::{Entity, SchemaRecord};
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::generators::{interface::EntitySource, GeneratorContext};

/// Records whose placeholders are declared in `generator_configuration.json`.
pub struct SchemaGenerator;

impl EntitySource for SchemaGenerator {
    fn load_entities(&self, context: &GeneratorContext) -> Result<Vec<Entity>> {
        let configuration = context.bundle.schema_configuration.as_ref().ok_or_else(|| {
            Error::ConfigFileNotFound {
                path: context.paths.configs_dir.join(GENERATOR_CONFIGURATION).to_display_string(),
            }
        })?;
        context
            .descriptions()?
            .iter()
            .map(|raw| SchemaRecord::into_entity(raw, configuration))
            .collect()
    }
}
