//! Path management for fintrack
//!
//! ## Path Resolution Order
//!
//! 1. `FINTRACK_DATA_DIR` environment variable (if set)
//! 2. The platform data directory (`~/.local/share/fintrack` on Linux,
//!    `~/Library/Application Support/fintrack` on macOS, `%APPDATA%` on
//!    Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FintrackError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FINTRACK_DATA_DIR";

/// Manages all paths used by fintrack
#[derive(Debug, Clone)]
pub struct FintrackPaths {
    base_dir: PathBuf,
}

impl FintrackPaths {
    /// Resolve the base directory from the environment or the platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FintrackError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "fintrack")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| {
                    FintrackError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create FintrackPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    pub fn investments_file(&self) -> PathBuf {
        self.data_dir().join("investments.json")
    }

    /// Create the base and data directories if missing
    pub fn ensure_directories(&self) -> Result<(), FintrackError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FintrackError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FintrackError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Whether `fintrack init` has written a config file
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        env::set_var(DATA_DIR_ENV, temp_dir.path());
        let paths = FintrackPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().join("nested"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
        assert_eq!(
            paths.transactions_file(),
            temp_dir.path().join("data").join("transactions.json")
        );
        assert_eq!(
            paths.investments_file(),
            temp_dir.path().join("data").join("investments.json")
        );
    }
}
