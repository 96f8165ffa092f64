//! Configuration of the schema-driven generator (`generator_configuration.json`).

use crate::error::{Error, Result};
use crate::modifier::ModifierChain;
use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    List,
}

/// How a list field is turned into a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListPlaceholderRule {
    /// Joined with newlines into one text value.
    MergeWithNewline,
    /// Kept as a list and used as the description's flags.
    MetaAttributes,
}

/// Declaration of one description field.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldSchema {
    /// Placeholder the field is bound to. Fields without one are ignored.
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub is_optional: bool,
    #[serde(default)]
    pub list_placeholder_rule: Option<ListPlaceholderRule>,
    /// Extra placeholders computed from the field's text value.
    #[serde(default)]
    pub derived_placeholders: IndexMap<String, ModifierChain>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileNamePlaceholders {
    /// Placeholders computed from the description's file stem.
    #[serde(default)]
    pub derived_placeholders: IndexMap<String, ModifierChain>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaConfiguration {
    #[serde(default)]
    pub file_name: FileNamePlaceholders,
    #[serde(default)]
    pub description_schema: IndexMap<String, FieldSchema>,
}

impl SchemaConfiguration {
    pub fn validate(&self) -> Result<()> {
        for (field, schema) in &self.description_schema {
            match (schema.field_type, schema.list_placeholder_rule) {
                (FieldType::List, None) if schema.placeholder.is_some() => {
                    return Err(Error::ConfigValidation(format!(
                        "list placeholder '{field}' does not have list_placeholder_rule"
                    )));
                }
                (FieldType::String, Some(_)) => {
                    return Err(Error::ConfigValidation(format!(
                        "string placeholder '{field}' cannot have list_placeholder_rule"
                    )));
                }
                (FieldType::List, Some(ListPlaceholderRule::MetaAttributes))
                    if !schema.derived_placeholders.is_empty() =>
                {
                    return Err(Error::ConfigValidation(format!(
                        "meta attribute list '{field}' cannot have derived placeholders"
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_configuration_with_modifiers() {
        let config: SchemaConfiguration = serde_json::from_str(
            r#"{
                "file_name": {"derived_placeholders": {"class_name": ["modifier:remove_suffix(Item)"]}},
                "description_schema": {
                    "title": {"placeholder": "item_title", "type": "string",
                              "derived_placeholders": {"item_title_upper": ["modifier:to_upper"]}},
                    "tags": {"placeholder": "item_tags", "type": "list", "is_optional": true,
                             "list_placeholder_rule": "meta_attributes"}
                }
            }"#,
        )
        .unwrap();
        config.validate().unwrap();
        assert_eq!(config.file_name.derived_placeholders["class_name"].apply("SwordItem"), "Sword");
        assert!(config.description_schema["tags"].is_optional);
    }

    #[test]
    fn list_without_rule_is_rejected() {
        let config: SchemaConfiguration = serde_json::from_str(
            r#"{"description_schema": {"tags": {"placeholder": "tags", "type": "list"}}}"#,
        )
        .unwrap();
        assert!(matches!(config.validate(), Err(Error::ConfigValidation(_))));
    }

    #[test]
    fn unknown_rule_fails_to_parse() {
        let result = serde_json::from_str::<SchemaConfiguration>(
            r#"{"description_schema": {"tags": {"placeholder": "tags", "type": "list", "list_placeholder_rule": "zip"}}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn bad_modifier_fails_to_parse() {
        let result = serde_json::from_str::<SchemaConfiguration>(
            r#"{"file_name": {"derived_placeholders": {"x": ["to_lower"]}}}"#,
        );
        assert!(result.is_err());
    }
}
