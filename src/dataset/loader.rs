//! @ai:module:intent Line-oriented dataset file loader
//! @ai:module:layer infrastructure
//! @ai:module:public_api DatasetLoader
//! @ai:module:stateless true

use crate::dataset::value::Value;
use crate::error::{Error, Result};
use std::path::Path;

/// @ai:intent Trait for loading numeric datasets
pub trait DatasetLoaderTrait: Send + Sync {
    /// @ai:intent Load all values from a dataset file
    fn load(&self, path: &Path) -> Result<Vec<Value>>;
}

/// @ai:intent Loads numeric datasets from text files
/// @ai:effects pure (stateless)
pub struct DatasetLoader;

impl DatasetLoader {
    /// @ai:intent Create a new dataset loader
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Parse one line into zero or more values
    /// @ai:pre line_no is 1-based
    /// @ai:effects pure
    fn parse_line(line_no: usize, line: &str) -> Result<Vec<Value>> {
        line.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<Value>().map_err(|_| Error::Parse {
                    line: line_no,
                    token: token.to_string(),
                })
            })
            .collect()
    }
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoaderTrait for DatasetLoader {
    /// @ai:intent Load all values from a dataset file
    ///            Loading is all-or-nothing: any malformed token fails
    ///            the whole file with its line number.
    /// @ai:effects fs:read
    fn load(&self, path: &Path) -> Result<Vec<Value>> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let mut values = Vec::new();

        for (index, line) in content.lines().enumerate() {
            values.extend(Self::parse_line(index + 1, line)?);
        }

        if values.is_empty() {
            return Err(Error::EmptyDataset);
        }

        tracing::debug!("Loaded {} values from {}", values.len(), path.display());
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_dataset(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_one_number_per_line() {
        let temp = TempDir::new().unwrap();
        let path = write_dataset(&temp, "data.txt", "5\n2\n9\n");

        let values = DatasetLoader::new().load(&path).unwrap();
        assert_eq!(values, vec![Value::Int(5), Value::Int(2), Value::Int(9)]);
    }

    #[test]
    fn test_load_comma_and_whitespace_separated() {
        let temp = TempDir::new().unwrap();
        let path = write_dataset(&temp, "data.txt", "1, 2,3\n4 5\t6\n");

        let values = DatasetLoader::new().load(&path).unwrap();
        assert_eq!(values.len(), 6);
        assert_eq!(values[0], Value::Int(1));
        assert_eq!(values[5], Value::Int(6));
    }

    #[test]
    fn test_load_mixed_int_and_float() {
        let temp = TempDir::new().unwrap();
        let path = write_dataset(&temp, "data.txt", "1.5, 2\n-3.25\n");

        let values = DatasetLoader::new().load(&path).unwrap();
        assert_eq!(
            values,
            vec![Value::Float(1.5), Value::Int(2), Value::Float(-3.25)]
        );
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let temp = TempDir::new().unwrap();
        let path = write_dataset(&temp, "data.txt", "1\n\n   \n2\n");

        let values = DatasetLoader::new().load(&path).unwrap();
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_load_reports_line_of_malformed_token() {
        let temp = TempDir::new().unwrap();
        let path = write_dataset(&temp, "data.txt", "1\n2\noops\n4\n");

        let err = DatasetLoader::new().load(&path).unwrap_err();
        match err {
            Error::Parse { line, token } => {
                assert_eq!(line, 3);
                assert_eq!(token, "oops");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_empty_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = write_dataset(&temp, "data.txt", "\n\n");

        let err = DatasetLoader::new().load(&path).unwrap_err();
        assert!(matches!(err, Error::EmptyDataset));
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = DatasetLoader::new()
            .load(&temp.path().join("missing.txt"))
            .unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }
}
