use crate::constants::TEMPLATE_EXTENSION;
use crate::error::{Error, Result};
use crate::renderer::Template;
use indexmap::IndexMap;
use log::debug;
use std::path::{Path, PathBuf};

/// Loads templates by name from a templates directory.
///
/// Templates are loaded up front with [`TemplateStore::preload`] so that a
/// missing or malformed template is reported before anything is written.
#[derive(Debug)]
pub struct TemplateStore {
    templates_dir: PathBuf,
    templates: IndexMap<String, Template>,
}

impl TemplateStore {
    pub fn new<P: AsRef<Path>>(templates_dir: P) -> Self {
        Self { templates_dir: templates_dir.as_ref().to_path_buf(), templates: IndexMap::new() }
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    pub fn template_path(&self, name: &str) -> PathBuf {
        self.templates_dir.join(format!("{name}.{TEMPLATE_EXTENSION}"))
    }

    /// Reads the raw text of a template with trailing newlines stripped.
    pub fn load_text(&self, name: &str) -> Result<String> {
        let path = self.template_path(name);
        if !path.is_file() {
            return Err(Error::TemplateNotFound {
                name: name.to_string(),
                templates_dir: self.templates_dir.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(content.trim_end_matches('\n').to_string())
    }

    /// Reads and parses a template without caching it.
    pub fn load(&self, name: &str) -> Result<Template> {
        let text = self.load_text(name)?;
        Template::parse(name, &text)
    }

    /// Loads every named template that is not loaded yet.
    pub fn preload<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            if self.templates.contains_key(name) {
                continue;
            }
            debug!("Loading template '{}' from {}", name, self.templates_dir.display());
            let template = self.load(name)?;
            self.templates.insert(name.to_string(), template);
        }
        Ok(())
    }

    /// Returns a preloaded template.
    pub fn get(&self, name: &str) -> Result<&Template> {
        self.templates.get(name).ok_or_else(|| Error::TemplateNotFound {
            name: name.to_string(),
            templates_dir: self.templates_dir.display().to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
