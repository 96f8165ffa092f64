use crate::description::{ComponentDescription, Entity};
use crate::error::Result;
use crate::generators::{interface::EntitySource, GeneratorContext};

/// Components: one entity per description, attributes as elements.
pub struct ComponentsGenerator;

impl EntitySource for ComponentsGenerator {
    fn load_entities(&self, context: &GeneratorContext) -> Result<Vec<Entity>> {
        context
            .descriptions()?
            .iter()
            .map(|raw| {
                ComponentDescription::into_entity(raw, &context.bundle.attribute_optional_fields)
            })
            .collect()
    }
}
