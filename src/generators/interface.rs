use crate::description::Entity;
use crate::error::Result;
use crate::generators::GeneratorContext;

/// Trait for turning a generator's inputs into entities.
pub trait EntitySource {
    /// Loads every entity the generator works on, in processing order.
    ///
    /// # Arguments
    /// * `context` - Loaded configuration of the generator
    ///
    /// # Returns
    /// * `Result<Vec<Entity>>` - Entities to plan files for
    fn load_entities(&self, context: &GeneratorContext) -> Result<Vec<Entity>>;
}
