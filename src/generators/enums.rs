use crate::description::{Entity, EnumDescription};
use crate::error::Result;
use crate::generators::{interface::EntitySource, GeneratorContext};

pub struct EnumsGenerator;

impl EntitySource for EnumsGenerator {
    fn load_entities(&self, context: &GeneratorContext) -> Result<Vec<Entity>> {
        context.descriptions()?.iter().map(EnumDescription::into_entity).collect()
    }
}
