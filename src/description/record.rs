//! Records of the schema-driven generator, whose fields are declared in
//! configuration instead of code.

use crate::config::schema::{FieldSchema, FieldType, ListPlaceholderRule, SchemaConfiguration};
use crate::description::{Entity, RawDescription};
use crate::dictionary::{PlaceholderDictionary, PlaceholderValue};
use crate::error::{Error, Result};
use serde_json::Value;

pub struct SchemaRecord;

impl SchemaRecord {
    pub fn into_entity(
        raw: &RawDescription,
        configuration: &SchemaConfiguration,
    ) -> Result<Entity> {
        let invalid = |message: String| Error::InvalidDescription {
            description: raw.stem.clone(),
            message,
        };
        let object = raw
            .value
            .as_object()
            .ok_or_else(|| invalid("description is not an object".to_string()))?;

        let mut dictionary = PlaceholderDictionary::new();
        for (placeholder, chain) in &configuration.file_name.derived_placeholders {
            dictionary.insert(placeholder.as_str(), chain.apply(&raw.stem));
        }

        let mut flags = Vec::new();
        for (field, schema) in &configuration.description_schema {
            let Some(placeholder) = schema.placeholder.as_deref() else {
                continue;
            };
            let value = match object.get(field) {
                None | Some(Value::Null) if schema.is_optional => continue,
                None | Some(Value::Null) => {
                    return Err(Error::MissingField {
                        description: raw.stem.clone(),
                        field: field.clone(),
                    })
                }
                Some(value) => value,
            };

            let value = field_value(field, schema, value).map_err(invalid)?;
            if let (PlaceholderValue::List(items), Some(ListPlaceholderRule::MetaAttributes)) =
                (&value, schema.list_placeholder_rule)
            {
                flags.extend(items.iter().cloned());
            }
            if let Some(text) = value.as_text() {
                for (derived, chain) in &schema.derived_placeholders {
                    dictionary.insert(derived.as_str(), chain.apply(text));
                }
            }
            dictionary.insert(placeholder, value);
        }

        let mut entity = Entity::new(raw.stem.as_str(), dictionary);
        entity.flags = flags;
        Ok(entity)
    }
}

fn field_value(
    field: &str,
    schema: &FieldSchema,
    value: &Value,
) -> std::result::Result<PlaceholderValue, String> {
    match schema.field_type {
        FieldType::String => value
            .as_str()
            .map(PlaceholderValue::from)
            .ok_or_else(|| format!("field '{field}' is not a string")),
        FieldType::List => {
            let items = value
                .as_array()
                .and_then(|items| {
                    items
                        .iter()
                        .map(|item| item.as_str().map(str::to_string))
                        .collect::<Option<Vec<_>>>()
                })
                .ok_or_else(|| format!("field '{field}' is not a list of strings"))?;
            match schema.list_placeholder_rule {
                Some(ListPlaceholderRule::MergeWithNewline) => {
                    Ok(PlaceholderValue::Text(items.join("\n")))
                }
                Some(ListPlaceholderRule::MetaAttributes) => Ok(PlaceholderValue::List(items)),
                None => Err(format!("list field '{field}' does not have list_placeholder_rule")),
            }
        }
    }
}
