//! Named-placeholder template rendering.

pub mod interface;
pub mod placeholder;

pub use interface::TemplateRenderer;
pub use placeholder::{PlaceholderRenderer, Template};
