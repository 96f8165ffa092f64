use crate::error::{Error, Result};

/// Validates descriptions against the JSON Schema of a generator bundle.
pub struct DescriptionValidator {
    validator: jsonschema::Validator,
}

impl std::fmt::Debug for DescriptionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescriptionValidator").finish_non_exhaustive()
    }
}

impl DescriptionValidator {
    pub fn new(schema: &serde_json::Value) -> Result<Self> {
        let validator = jsonschema::validator_for(schema).map_err(|e| {
            Error::ConfigValidation(format!("invalid description schema: {e}"))
        })?;
        Ok(Self { validator })
    }

    /// Checks one description, reporting every violation at once.
    pub fn validate(&self, description: &str, value: &serde_json::Value) -> Result<()> {
        let errors: Vec<String> = self
            .validator
            .iter_errors(value)
            .map(|error| format!("{} (at '{}')", error, error.instance_path()))
            .collect();

        if !errors.is_empty() {
            return Err(Error::InvalidDescription {
                description: description.to_string(),
                message: errors.join("; "),
            });
        }

        Ok(())
    }
}
