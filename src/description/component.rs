//! Component descriptions: a named set of attributes

use crate::constants::{COMPONENT_NAME_SUFFIX, INCLUDE_DIRECTIVE};
use crate::description::{Element, Entity, RawDescription};
use crate::dictionary::{PlaceholderDictionary, PlaceholderValue};
use crate::error::Result;
use crate::modifier::Modifier;
use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AttributeDescription {
    pub name: String,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    /// Every other declared field.
    #[serde(flatten)]
    pub fields: IndexMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComponentDescription {
    pub description: String,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeDescription>,
}

/// `HealthComponent` and `Health` both name the component `Health`.
pub fn component_name(stem: &str) -> String {
    Modifier::RemoveSuffix(COMPONENT_NAME_SUFFIX.to_string()).apply(stem)
}

fn upper_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn attribute_key(field: &str) -> String {
    format!("attribute_{field}")
}

impl AttributeDescription {
    /// Builds the attribute's placeholders, then fills every optional field
    /// the attribute does not declare from `optional_fields`.
    pub fn dictionary(
        &self,
        optional_fields: &IndexMap<String, serde_json::Value>,
    ) -> PlaceholderDictionary {
        let mut dictionary = PlaceholderDictionary::new();
        dictionary.insert(attribute_key("name"), self.name.as_str());
        dictionary.insert(attribute_key("flags"), self.flags.clone());
        dictionary.insert(attribute_key("includes"), self.includes.clone());
        for (field, value) in &self.fields {
            dictionary.insert(attribute_key(field), PlaceholderValue::from_json(value));
        }

        dictionary.insert("attribute_name_capital", upper_first(&self.name));
        dictionary.insert("attribute_tolower", self.name.to_lowercase());
        let include_full = self
            .includes
            .iter()
            .map(|include| format!("{INCLUDE_DIRECTIVE} {include}"))
            .collect::<Vec<_>>()
            .join("\n");
        dictionary.insert("attribute_include_full", include_full);

        for (field, default) in optional_fields {
            dictionary.insert_missing(attribute_key(field), PlaceholderValue::from_json(default));
        }
        dictionary
    }
}

impl ComponentDescription {
    /// Converts a component description into an entity whose elements are
    /// its attributes.
    pub fn into_entity(
        raw: &RawDescription,
        optional_fields: &IndexMap<String, serde_json::Value>,
    ) -> Result<Entity> {
        let description: ComponentDescription = raw.parse()?;
        let name = component_name(&raw.stem);

        let mut dictionary = PlaceholderDictionary::new();
        dictionary.insert("component_name", Modifier::LowerFirst.apply(&name));
        dictionary.insert("component_name_capital", name.as_str());
        dictionary.insert("class_name", format!("{name}{COMPONENT_NAME_SUFFIX}"));
        dictionary.insert("component_tolower", name.to_lowercase());
        dictionary.insert("component_description", description.description.as_str());
        dictionary.insert("component_flags", description.flags.clone());

        let elements = description
            .attributes
            .iter()
            .map(|attribute| Element {
                name: attribute.name.clone(),
                flags: attribute.flags.clone(),
                dictionary: attribute.dictionary(optional_fields),
            })
            .collect();

        Ok(Entity { name, flags: description.flags, dictionary, elements })
    }
}
