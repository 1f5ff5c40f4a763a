//! JSON serialization utilities with robust error handling.
//!
//! Writes go through a temporary file and an atomic rename so a crashed
//! process never leaves a half-written snapshot behind.

use crate::error::{IoError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serializes data to JSON with error handling.
pub fn to_json<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    serde_json::to_string(data)
        .map_err(|e| IoError::serialization(format!("JSON serialization failed: {e}")))
}

/// Serializes data to pretty-printed JSON.
pub fn to_json_pretty<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(data)
        .map_err(|e| IoError::serialization(format!("JSON serialization failed: {e}")))
}

/// Deserializes data from a JSON string.
pub fn from_json<T>(json: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    if json.trim().is_empty() {
        return Err(IoError::validation("Empty JSON string"));
    }
    serde_json::from_str(json)
        .map_err(|e| IoError::serialization(format!("JSON deserialization failed: {e}")))
}

/// Reads and deserializes a JSON file.
///
/// # Returns
/// Deserialized data on success, `IoError::NotFound` if the file is absent.
pub fn read_json_file<T, P>(path: P) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::not_found(path.display().to_string()));
    }
    let content = fs::read_to_string(path)
        .map_err(|e| IoError::from(e).with_context(format!("reading {}", path.display())))?;
    from_json(&content)
}

/// Serializes data to a pretty-printed JSON file.
///
/// Missing parent directories are created; the content lands via a
/// temporary file plus rename so readers never observe a partial write.
pub fn write_json_file<T, P>(path: P, data: &T) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                IoError::from(e).with_context(format!("creating {}", parent.display()))
            })?;
        }
    }
    let json = to_json_pretty(data)?;
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, json)
        .map_err(|e| IoError::from(e).with_context(format!("writing {}", tmp_path.display())))?;
    fs::rename(&tmp_path, path)
        .map_err(|e| IoError::from(e).with_context(format!("renaming to {}", path.display())))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Sample {
        name: String,
        count: u32,
    }

    fn sample() -> Sample {
        Sample {
            name: "universe".to_string(),
            count: 3,
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let json = to_json(&sample()).unwrap();
        let back: Sample = from_json(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_empty_json_rejected() {
        let result: Result<Sample> = from_json("   ");
        assert!(matches!(result, Err(IoError::Validation(_))));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result: Result<Sample> = read_json_file("/nonexistent/sample.json");
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("distinction_io_test_{}", std::process::id()));
        let path = dir.join("nested").join("sample.json");
        write_json_file(&path, &sample()).unwrap();
        let back: Sample = read_json_file(&path).unwrap();
        assert_eq!(back, sample());
        std::fs::remove_dir_all(&dir).ok();
    }
}
