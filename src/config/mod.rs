//! Configuration of datagen runs
//!
//! - `loader`: the generator registry and selection of generators
//! - `bundle`: the per-generator configuration files
//! - `types`: aggregate templates and the file-output plan
//! - `schema`: fields of the schema-driven generator

pub mod bundle;
pub mod loader;
pub mod schema;
pub mod types;

pub use bundle::GeneratorBundle;
pub use loader::{GeneratorConfig, GeneratorKind, GeneratorPaths, GeneratorsConfig, Selection};
pub use schema::SchemaConfiguration;
pub use types::{AggregateTemplate, FileToGenerate, GenerationMode, TemplateParam};
