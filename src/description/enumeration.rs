use crate::description::{Element, Entity, RawDescription};
use crate::dictionary::PlaceholderDictionary;
use crate::error::Result;
use serde::Deserialize;

/// An enumeration: the file name is the enum name, `values` its members.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumDescription {
    pub values: Vec<String>,
}

impl EnumDescription {
    pub fn into_entity(raw: &RawDescription) -> Result<Entity> {
        let description: EnumDescription = raw.parse()?;

        let mut dictionary = PlaceholderDictionary::new();
        dictionary.insert("enum_name", raw.stem.as_str());
        dictionary.insert("enum_values", description.values.clone());

        let elements = description
            .values
            .into_iter()
            .map(|value| Element {
                dictionary: [("enum_value", value.as_str())].into_iter().collect(),
                name: value,
                flags: Vec::new(),
            })
            .collect();

        let mut entity = Entity::new(raw.stem.as_str(), dictionary);
        entity.elements = elements;
        Ok(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::PlaceholderValue;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawDescription {
        RawDescription { stem: "Direction".into(), path: "Direction.json".into(), value }
    }

    #[test]
    fn values_become_elements() {
        let entity =
            EnumDescription::into_entity(&raw(json!({"values": ["North", "South"]}))).unwrap();
        assert_eq!(entity.dictionary.get_text("enum_name"), Some("Direction"));
        assert_eq!(
            entity.dictionary.get("enum_values"),
            Some(&PlaceholderValue::List(vec!["North".into(), "South".into()]))
        );
        let values: Vec<Option<&str>> =
            entity.elements.iter().map(|e| e.dictionary.get_text("enum_value")).collect();
        assert_eq!(values, vec![Some("North"), Some("South")]);
    }

    #[test]
    fn values_are_required() {
        let err = EnumDescription::into_entity(&raw(json!({}))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
