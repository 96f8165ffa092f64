use std::path::Path;

use crate::error::{Error, Result};

/// Extension trait for Path to provide convenient string conversion methods
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path
    /// contains invalid Unicode characters.
    fn to_str_checked(&self) -> Result<&str>;

    /// Converts a path to a String using display(), which always succeeds
    /// but may use replacement characters for invalid Unicode.
    fn to_display_string(&self) -> String;

    /// File name without its extension, as UTF-8.
    fn file_stem_checked(&self) -> Result<&str>;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn to_display_string(&self) -> String {
        self.display().to_string()
    }

    fn file_stem_checked(&self) -> Result<&str> {
        self.file_stem().and_then(|stem| stem.to_str()).ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' has no valid file name",
                self.display()
            ))
        })
    }
}
