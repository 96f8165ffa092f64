use crate::dictionary::PlaceholderDictionary;
use crate::error::{Error, Result};
use crate::renderer::interface::TemplateRenderer;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed template.
///
/// `{name}` is a placeholder, `{{` and `}}` are literal braces. Anything else
/// between braces is rejected when the template is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    segments: Vec<Segment>,
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Template {
    pub fn parse<N: Into<String>>(name: N, text: &str) -> Result<Self> {
        let name = name.into();
        let malformed = |message: String| Error::MalformedTemplate {
            template: name.clone(),
            message,
        };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = text.char_indices().peekable();

        while let Some((position, c)) = chars.next() {
            match c {
                '{' if chars.peek().map(|&(_, next)| next) == Some('{') => {
                    chars.next();
                    literal.push('{');
                }
                '{' => {
                    let mut placeholder = String::new();
                    let mut closed = false;
                    for (_, inner) in chars.by_ref() {
                        if inner == '}' {
                            closed = true;
                            break;
                        }
                        placeholder.push(inner);
                    }
                    if !closed {
                        return Err(malformed(format!(
                            "unterminated placeholder at byte {position}"
                        )));
                    }
                    if !is_placeholder_name(&placeholder) {
                        return Err(malformed(format!(
                            "invalid placeholder '{{{placeholder}}}' at byte {position}"
                        )));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(placeholder));
                }
                '}' if chars.peek().map(|&(_, next)| next) == Some('}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => {
                    return Err(malformed(format!("single '}}' encountered at byte {position}")));
                }
                other => literal.push(other),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { name, segments })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(name) = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    fn fill(&self, dictionary: &PlaceholderDictionary) -> Result<String> {
        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(key) => {
                    let value = dictionary.get(key).ok_or_else(|| Error::MissingPlaceholder {
                        template: self.name.clone(),
                        placeholder: key.clone(),
                    })?;
                    output.push_str(&value.to_string());
                }
            }
        }
        Ok(output)
    }
}

/// Single-pass named-placeholder renderer.
///
/// Substituted values are never scanned for placeholders again.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    fn render(&self, template: &Template, dictionary: &PlaceholderDictionary) -> Result<String> {
        template.fill(dictionary)
    }

    fn render_str(
        &self,
        name: &str,
        text: &str,
        dictionary: &PlaceholderDictionary,
    ) -> Result<String> {
        Template::parse(name, text)?.fill(dictionary)
    }
}
