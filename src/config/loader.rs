//! Generator registry loading and selection

use crate::constants::{CONFIG_FILENAMES, DEFAULT_SOURCES_DIR};
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::ioutils::resolve_path;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Description kind a generator works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    Components,
    Enums,
    StringIds,
    Schema,
}

impl GeneratorKind {
    pub fn needs_descriptions(self) -> bool {
        !matches!(self, GeneratorKind::StringIds)
    }
}

/// One entry of the registry's `generators` table.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    pub kind: GeneratorKind,
    pub configs_dir: PathBuf,
    /// Relative to `configs_dir`.
    #[serde(default = "get_default_templates_dir")]
    pub templates_dir: PathBuf,
    #[serde(default)]
    pub descriptions_dir: Option<PathBuf>,
    pub output_dir_base: PathBuf,
    /// Scanned for string literals; defaults to `<output_dir_base>/src`.
    #[serde(default)]
    pub sources_dir: Option<PathBuf>,
    #[serde(default)]
    pub string_literal_pattern: Option<String>,
    /// Glob patterns, relative to the sources directory, skipped while scanning.
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn get_default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

/// Generator paths resolved against the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorPaths {
    pub configs_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub descriptions_dir: Option<PathBuf>,
    pub output_dir_base: PathBuf,
    pub sources_dir: PathBuf,
}

impl GeneratorConfig {
    pub fn validate(&self, id: &str) -> Result<()> {
        if self.kind.needs_descriptions() && self.descriptions_dir.is_none() {
            return Err(Error::ConfigValidation(format!(
                "generator '{id}' requires 'descriptions_dir'"
            )));
        }
        if self.kind != GeneratorKind::StringIds
            && (self.sources_dir.is_some()
                || self.string_literal_pattern.is_some()
                || !self.exclude.is_empty())
        {
            return Err(Error::ConfigValidation(format!(
                "generator '{id}' is not a string_ids generator and cannot scan sources"
            )));
        }
        Ok(())
    }

    pub fn resolve<P: AsRef<Path>>(&self, working_dir: P) -> GeneratorPaths {
        let working_dir = working_dir.as_ref();
        let configs_dir = resolve_path(working_dir, &self.configs_dir);
        let output_dir_base = resolve_path(working_dir, &self.output_dir_base);
        let sources_dir = match &self.sources_dir {
            Some(dir) => resolve_path(working_dir, dir),
            None => output_dir_base.join(DEFAULT_SOURCES_DIR),
        };
        GeneratorPaths {
            templates_dir: resolve_path(&configs_dir, &self.templates_dir),
            descriptions_dir: self
                .descriptions_dir
                .as_ref()
                .map(|dir| resolve_path(working_dir, dir)),
            configs_dir,
            output_dir_base,
            sources_dir,
        }
    }
}

/// The generator registry: generators by id and named groups of ids.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorsConfig {
    pub generators: IndexMap<String, GeneratorConfig>,
    #[serde(default)]
    pub groups: IndexMap<String, Vec<String>>,
}

impl GeneratorsConfig {
    /// Finds the registry in `working_dir` and returns it with its path.
    pub fn load_config<P: AsRef<Path>>(working_dir: P) -> Result<(Self, PathBuf)> {
        let working_dir = working_dir.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = working_dir.join(config_file_name);
            if config_file_path.exists() {
                let config = Self::from_file(&config_file_path)?;
                return Ok((config, config_file_path));
            }
        }

        Err(Error::ConfigNotFound {
            config_dir: working_dir.to_display_string(),
            config_files: CONFIG_FILENAMES.join(", "),
        })
    }

    /// Reads a registry file; the format follows its extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::ConfigFileNotFound { path: path.to_display_string() });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (id, generator) in &self.generators {
            generator.validate(id)?;
        }
        for (group, members) in &self.groups {
            for member in members {
                if !self.generators.contains_key(member) {
                    return Err(Error::ConfigValidation(format!(
                        "group '{group}' refers to unknown generator '{member}'"
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn generator(&self, id: &str) -> Result<&GeneratorConfig> {
        self.generators.get(id).ok_or_else(|| Error::UnknownSelection {
            what: "generator",
            name: id.to_string(),
            available: join_keys(self.generators.keys()),
        })
    }

    pub fn group(&self, name: &str) -> Result<&[String]> {
        self.groups.get(name).map(Vec::as_slice).ok_or_else(|| Error::UnknownSelection {
            what: "group",
            name: name.to_string(),
            available: join_keys(self.groups.keys()),
        })
    }

    /// Resolves a selection to generator ids in execution order.
    ///
    /// `all` selects every registered generator; otherwise either a single
    /// generator or the members of a group.
    pub fn select(&self, selection: &Selection) -> Result<Vec<String>> {
        match selection {
            Selection::All => Ok(self.generators.keys().cloned().collect()),
            Selection::Generator(id) => {
                self.generator(id)?;
                Ok(vec![id.clone()])
            }
            Selection::Group(name) => Ok(self.group(name)?.to_vec()),
        }
    }
}

/// Which registered generators a run covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Generator(String),
    Group(String),
}

fn join_keys<'a, I: Iterator<Item = &'a String>>(keys: I) -> String {
    let keys: Vec<&str> = keys.map(String::as_str).collect();
    if keys.is_empty() {
        "none".to_string()
    } else {
        keys.join(", ")
    }
}
