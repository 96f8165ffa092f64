use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to traverse directory. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Failed to parse exclude pattern. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Invalid string literal pattern. Original error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("No generator registry found in '{config_dir}'. Tried: {config_files}.")]
    ConfigNotFound { config_dir: String, config_files: String },

    #[error("Required configuration file '{path}' does not exist.")]
    ConfigFileNotFound { path: String },

    #[error("Configuration error: {0}.")]
    ConfigValidation(String),

    #[error("Template '{name}' not found in '{templates_dir}'.")]
    TemplateNotFound { name: String, templates_dir: String },

    #[error("Template '{template}' is malformed: {message}.")]
    MalformedTemplate { template: String, message: String },

    #[error("Template '{template}' references placeholder '{placeholder}' which is not defined.")]
    MissingPlaceholder { template: String, placeholder: String },

    #[error("Modifier '{modifier}' does not start with 'modifier:'.")]
    MalformedModifier { modifier: String },

    #[error("Unknown modifier '{name}' taking {arity} arguments.")]
    UnknownModifier { name: String, arity: usize },

    #[error("Modifier '{modifier}' has too many arguments.")]
    TooManyModifierArguments { modifier: String },

    #[error("Description '{description}' is invalid: {message}.")]
    InvalidDescription { description: String, message: String },

    #[error("Field '{field}' is required but missing in '{description}'.")]
    MissingField { description: String, field: String },

    #[error("Hash collision between {first} and {second}: {hash}")]
    HashCollision { first: String, second: String, hash: u64 },

    #[error("Unknown {what} '{name}'. Available: {available}.")]
    UnknownSelection { what: &'static str, name: String, available: String },

    #[error("Error in generator '{generator}': {source}")]
    Generator {
        generator: String,
        #[source]
        source: Box<Error>,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Coarse classification of every [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed configuration, templates or modifiers.
    Configuration,
    /// Description data that does not satisfy its declared shape.
    Validation,
    /// Two distinct string literals share a fingerprint.
    Collision,
    /// Filesystem failures.
    Io,
}

impl Error {
    /// Wraps the error with the name of the generator that raised it.
    pub fn in_generator(self, generator: &str) -> Self {
        match self {
            Error::Generator { .. } => self,
            other => Error::Generator {
                generator: generator.to_string(),
                source: Box::new(other),
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::IoError(_) | Error::WalkDirError(_) => ErrorKind::Io,
            Error::InvalidDescription { .. }
            | Error::MissingField { .. } => ErrorKind::Validation,
            Error::HashCollision { .. } => ErrorKind::Collision,
            Error::Generator { source, .. } => source.kind(),
            Error::JSONParseError(_)
            | Error::YAMLParseError(_)
            | Error::GlobSetParseError(_)
            | Error::RegexError(_)
            | Error::ConfigNotFound { .. }
            | Error::ConfigFileNotFound { .. }
            | Error::ConfigValidation(_)
            | Error::TemplateNotFound { .. }
            | Error::MalformedTemplate { .. }
            | Error::MissingPlaceholder { .. }
            | Error::MalformedModifier { .. }
            | Error::UnknownModifier { .. }
            | Error::TooManyModifierArguments { .. }
            | Error::UnknownSelection { .. }
            | Error::Other(_) => ErrorKind::Configuration,
        }
    }
}

/// Convenience type alias for Results with datagen's Error as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
