//! Descriptions and their conversion into placeholder dictionaries
//!
//! Every description kind is parsed into a typed struct and then turned into
//! an [`Entity`], the kind-independent view the generation planner works on.

pub mod component;
pub mod enumeration;
pub mod record;

use crate::constants::DESCRIPTION_EXTENSION;
use crate::dictionary::PlaceholderDictionary;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::ioutils::sorted_files;
use crate::validation::DescriptionValidator;
use log::debug;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

pub use component::{AttributeDescription, ComponentDescription};
pub use enumeration::EnumDescription;
pub use record::SchemaRecord;

/// A part of an entity that templates can be instantiated for, e.g. a
/// component attribute or an enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub flags: Vec<String>,
    pub dictionary: PlaceholderDictionary,
}

/// Kind-independent view of one description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    pub flags: Vec<String>,
    /// Identity placeholders derived from the description.
    pub dictionary: PlaceholderDictionary,
    pub elements: Vec<Element>,
}

impl Entity {
    pub fn new<S: Into<String>>(name: S, dictionary: PlaceholderDictionary) -> Self {
        Self { name: name.into(), flags: Vec::new(), dictionary, elements: Vec::new() }
    }
}

/// A description file read from disk, not yet interpreted.
#[derive(Debug, Clone)]
pub struct RawDescription {
    /// File name without the extension.
    pub stem: String,
    pub path: PathBuf,
    pub value: serde_json::Value,
}

impl RawDescription {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let stem = path.file_stem_checked()?.to_string();
        let content = std::fs::read_to_string(path)?;
        let value = serde_json::from_str(&content).map_err(|e| Error::InvalidDescription {
            description: stem.clone(),
            message: e.to_string(),
        })?;
        Ok(Self { stem, path: path.to_path_buf(), value })
    }

    /// Deserializes the description into its typed form.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        T::deserialize(&self.value).map_err(|e| Error::InvalidDescription {
            description: self.stem.clone(),
            message: e.to_string(),
        })
    }
}

/// Reads every description of a directory in file name order.
pub fn load_descriptions<P: AsRef<Path>>(
    descriptions_dir: P,
    validator: Option<&DescriptionValidator>,
) -> Result<Vec<RawDescription>> {
    let descriptions_dir = descriptions_dir.as_ref();
    if !descriptions_dir.is_dir() {
        return Err(Error::ConfigValidation(format!(
            "descriptions directory '{}' does not exist",
            descriptions_dir.display()
        )));
    }

    let mut descriptions = Vec::new();
    for path in sorted_files(descriptions_dir)? {
        if path.extension().and_then(|ext| ext.to_str()) != Some(DESCRIPTION_EXTENSION) {
            debug!("Skipping non-description file {}", path.display());
            continue;
        }
        let description = RawDescription::read(&path)?;
        if let Some(validator) = validator {
            validator.validate(&description.stem, &description.value)?;
        }
        descriptions.push(description);
    }
    debug!("Loaded {} descriptions from {}", descriptions.len(), descriptions_dir.display());
    Ok(descriptions)
}
