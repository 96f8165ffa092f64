use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, creating missing parent directories.
pub fn write_file<P: AsRef<Path>>(content: &[u8], dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Fails with [`Error::ConfigFileNotFound`] when `path` is not a file.
pub fn require_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::ConfigFileNotFound { path: path.display().to_string() })
    }
}

/// Reads and deserializes a JSON file that must exist.
pub fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    require_file(path)?;
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Reads and deserializes a JSON file, returning `None` if it does not exist.
pub fn load_optional_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Option<T>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    load_json(path).map(Some)
}

/// Lists the regular files of a directory (not recursive), sorted by name.
pub fn sorted_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Resolves `path` against `base` unless it is already absolute.
pub fn resolve_path<B: AsRef<Path>, P: AsRef<Path>>(base: B, path: P) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.as_ref().join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn write_file_creates_parents() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("a").join("b").join("file.h");
        write_file(b"content\n", &target).unwrap();
        assert_eq!(fs::read_to_string(target).unwrap(), "content\n");
    }

    #[test]
    fn sorted_files_skips_directories() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let files = sorted_files(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("a.json"), dir.path().join("b.json")]);
    }

    #[test]
    fn optional_json_missing_is_none() {
        let dir = TempDir::new().unwrap();
        let value: Option<serde_json::Value> =
            load_optional_json(dir.path().join("absent.json")).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn required_json_missing_is_config_error() {
        let dir = TempDir::new().unwrap();
        let err = load_json::<serde_json::Value, _>(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::ConfigFileNotFound { .. }));
    }

    #[test]
    fn resolve_keeps_absolute_paths() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve_path("/base", dir.path()), dir.path());
        assert_eq!(resolve_path("/base", "rel"), Path::new("/base/rel"));
    }
}
