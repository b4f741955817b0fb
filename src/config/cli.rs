use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Writes reports flat under `base_path` (`<base_path>/contrast_report.csv`, ...),
/// creating the directory on first write.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_missing_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested/reports");
        let storage = LocalStorage::new(base.to_string_lossy().into_owned());

        storage.write_file("contrast_report.csv", b"name\n").unwrap();
        assert_eq!(
            fs::read(base.join("contrast_report.csv")).unwrap(),
            b"name\n"
        );
    }

    #[test]
    fn test_write_into_file_path_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();

        let storage = LocalStorage::new(blocker.to_string_lossy().into_owned());
        let err = storage.write_file("contrast_report.json", b"{}").unwrap_err();
        assert!(matches!(err, crate::utils::error::ContrastError::IoError(_)));
    }
}
