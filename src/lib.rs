/// Handles argument parsing and the run workflow.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared across modules.
pub mod constants;

/// Extension traits for standard library types.
pub mod ext;

/// Generator registry and per-generator configuration.
pub mod config;

/// Descriptions and the entities derived from them.
pub mod description;

/// Placeholder dictionaries.
pub mod dictionary;

/// Declarative string modifiers.
pub mod modifier;

/// Whitelist/blacklist filtering.
pub mod filter;

/// Placeholder template parsing and rendering.
pub mod renderer;

/// Template loading, aggregation and generation planning.
pub mod template;

/// Per-kind generator pipelines.
pub mod generators;

/// Idempotent file emission.
pub mod emitter;

/// Persisted record of generated files.
pub mod cache;

/// String literal interning.
pub mod interning;

/// Exclude patterns for source scans.
pub mod ignore;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Description validation against JSON Schema.
pub mod validation;
