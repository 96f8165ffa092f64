//! Constants used throughout datagen

/// Generator registry file names in order of preference
pub const CONFIG_FILENAMES: &[&str] =
    &["generators.json", "generators.yaml", "generators.yml"];

/// Extension appended to a template name to find its file
pub const TEMPLATE_EXTENSION: &str = "template";

/// Extension of description files
pub const DESCRIPTION_EXTENSION: &str = "json";

/// Suffix stripped from component description names
pub const COMPONENT_NAME_SUFFIX: &str = "Component";

/// Prefix every modifier entry of a chain must start with
pub const MODIFIER_PREFIX: &str = "modifier:";

/// Prefix of the lines generated for attribute includes
pub const INCLUDE_DIRECTIVE: &str = "#include";

/// Separator used when a list placeholder is rendered as text
pub const LIST_RENDER_SEPARATOR: &str = ", ";

/// Marker pattern for interned string literals, group 1 is the literal
pub const DEFAULT_STRING_LITERAL_PATTERN: &str = r#"\WSTR_TO_ID\(\s*"([^"]*)"\s*\)"#;

/// Sources directory scanned for string literals, relative to the output base
pub const DEFAULT_SOURCES_DIR: &str = "src";

/// Caches directory created next to the registry file
pub const DEFAULT_CACHES_DIR: &str = "caches";

/// Persisted list of files produced by the previous run
pub const PREVIOUSLY_GENERATED_FILES: &str = "previously_generated_files.txt";

/// Files of a generator configuration bundle
pub mod bundle {
    pub const DELIMITER_DICTIONARY: &str = "delimiter_dictionary.json";
    pub const FILES_TO_GENERATE: &str = "files_to_generate.json";
    pub const ATTRIBUTE_TEMPLATES: &str = "attribute_templates.json";
    pub const COMPONENT_TEMPLATES: &str = "component_templates.json";
    pub const ELEMENT_TEMPLATES: &str = "element_templates.json";
    pub const ATTRIBUTE_OPTIONAL_FIELDS: &str = "attribute_optional_fields.json";
    pub const DESCRIPTION_SCHEMA: &str = "description_schema.json";
    pub const GENERATOR_CONFIGURATION: &str = "generator_configuration.json";
}

/// FNV-1a 64-bit parameters
pub mod fnv {
    pub const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    pub const PRIME: u64 = 0x100000001b3;
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
