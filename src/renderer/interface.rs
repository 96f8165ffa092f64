use crate::dictionary::PlaceholderDictionary;
use crate::error::Result;
use crate::renderer::placeholder::Template;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Fills a parsed template with the given dictionary.
    ///
    /// # Arguments
    /// * `template` - Parsed template to render
    /// * `dictionary` - Placeholder values
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text, or an error naming the first
    ///   placeholder missing from the dictionary
    fn render(&self, template: &Template, dictionary: &PlaceholderDictionary) -> Result<String>;

    /// Parses and renders a template given as text, e.g. an output file name
    /// template from configuration.
    ///
    /// # Arguments
    /// * `name` - Name used in error messages
    /// * `text` - Template text
    /// * `dictionary` - Placeholder values
    fn render_str(
        &self,
        name: &str,
        text: &str,
        dictionary: &PlaceholderDictionary,
    ) -> Result<String>;
}
