//! JSON file helpers for the ~/.railops/ directory.

use crate::error::Result;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Get the ~/.railops/ directory path, creating it if needed.
pub fn railops_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".railops");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.railops/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(railops_dir()?.join(filename))
}

/// Load a JSON file from ~/.railops/. `Ok(None)` if the file is missing;
/// an error if it exists but cannot be read or parsed.
pub fn load_json<T: serde::de::DeserializeOwned>(filename: &str) -> Result<Option<T>> {
    let path = data_path(filename)?;
    match fs::read_to_string(&path) {
        Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Save a value as pretty-printed JSON to ~/.railops/.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> Result<()> {
    let path = data_path(filename)?;
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_railops_dir_exists() {
        let dir = railops_dir().expect("railops_dir should succeed");
        assert!(dir.exists());
        assert!(dir.ends_with(".railops"));
    }

    #[test]
    fn test_data_path_format() {
        let path = data_path("test.json").expect("data_path should succeed");
        assert!(path.to_string_lossy().ends_with(".railops/test.json"));
    }

    #[test]
    fn test_load_missing_returns_none() {
        let val: Option<Vec<String>> =
            load_json("nonexistent_test_file_12345.json").expect("missing file is not an error");
        assert!(val.is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json("persistence_test.json", &data).expect("save should succeed");

        let loaded: Option<Vec<String>> = load_json("persistence_test.json").unwrap();
        assert_eq!(loaded, Some(data));

        // Cleanup
        let path = data_path("persistence_test.json").unwrap();
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_invalid_json_is_error() {
        let path = data_path("persistence_invalid_test.json").unwrap();
        fs::write(&path, "{not json").unwrap();
        let loaded: Result<Option<Vec<String>>> = load_json("persistence_invalid_test.json");
        assert!(loaded.is_err());
        fs::remove_file(path).ok();
    }
}
