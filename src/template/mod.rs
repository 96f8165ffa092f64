//! Template processing engine for datagen
//!
//! This module contains the core template processing components:
//! - `store`: Loads templates by name from a templates directory
//! - `aggregate`: Renders a template over many elements with delimiters
//! - `operation`: Defines the files a run produces
//! - `processor`: Plans the files of a generator from its entities

pub mod aggregate;
pub mod operation;
pub mod processor;
pub mod store;

pub use operation::{EmitOutcome, GenerateOperation};
pub use processor::TemplateProcessor;
pub use store::TemplateStore;
