//! Environment variable handling and .env file management

use crate::error::{AppError, Result};
use std::path::Path;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env file from the working directory if it exists
    pub fn load_env_file(debug: bool) -> Result<()> {
        Self::load_env_file_from(Path::new(".env"), debug)
    }

    /// Load a specific env file if it exists; existing variables are not overwritten
    pub fn load_env_file_from(path: &Path, debug: bool) -> Result<()> {
        if path.exists() {
            dotenv::from_path(path)
                .map_err(|e| AppError::config(format!("Failed to load {}: {}", path.display(), e)))?;

            if debug {
                eprintln!("Loaded configuration from {}", path.display());
            }
        } else if debug {
            eprintln!("No {} file found, using defaults and CLI arguments", path.display());
        }

        Ok(())
    }

    /// Create example .env file content
    pub fn create_example_env_content() -> String {
        format!(r#"# Map Bench Configuration
#
# Values here are used as defaults and can be overridden by
# environment variables and command-line arguments.

# Elements generated and transformed per measurement
# BENCH_LENGTH={length}

# What each index is mapped to: records or numbers
# BENCH_PAYLOAD=records

# Worker threads for the library map (0 = all logical CPUs)
# BENCH_THREADS={threads}

# Result format: text or json
# BENCH_FORMAT=text

# Enable colored output (true/false)
# ENABLE_COLOR=true

# Estimated peak memory, in bytes, above which a warning is printed
# BENCH_MEMORY_WARNING={memory}

# Example configurations:
#
# Thirty million records (several GiB of memory):
# BENCH_LENGTH=30_000_000
#
# One hundred million doubled numbers with a parallel library map:
# BENCH_LENGTH=100_000_000
# BENCH_PAYLOAD=numbers
# BENCH_THREADS=0
"#,
            length = crate::defaults::DEFAULT_LENGTH,
            threads = crate::defaults::DEFAULT_THREADS,
            memory = crate::defaults::MEMORY_WARNING_BYTES,
        )
    }

    /// Save example .env file to disk
    pub fn save_example_env_file(path: &Path) -> Result<()> {
        let content = Self::create_example_env_content();
        std::fs::write(path, content)
            .map_err(|e| AppError::io(format!("Failed to write {}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Get list of all supported environment variables with descriptions
    pub fn get_supported_env_vars() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("BENCH_LENGTH", "Elements transformed per measurement", "30_000_000"),
            ("BENCH_PAYLOAD", "Payload per index (records|numbers)", "records"),
            ("BENCH_THREADS", "Library map worker threads (0 = all CPUs)", "1"),
            ("BENCH_FORMAT", "Result format (text|json)", "text"),
            ("ENABLE_COLOR", "Enable colored output", "true"),
            ("BENCH_MEMORY_WARNING", "Peak memory warning threshold in bytes", "4_294_967_296"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_example_env_content() {
        let content = EnvManager::create_example_env_content();
        for (var_name, _, _) in EnvManager::get_supported_env_vars() {
            assert!(content.contains(&format!("{}=", var_name)), "missing {}", var_name);
        }
    }

    #[test]
    fn test_save_example_env_file() {
        let temp_file = NamedTempFile::new().unwrap();
        EnvManager::save_example_env_file(temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("Map Bench Configuration"));
    }

    #[test]
    fn test_save_example_env_file_bad_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing").join(".env");
        let err = EnvManager::save_example_env_file(&missing).unwrap_err();
        assert_eq!(err.category(), "IO");
        assert_eq!(err.exit_code(), 5);
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_load_missing_env_file_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        assert!(EnvManager::load_env_file_from(&temp_dir.path().join(".env"), false).is_ok());
    }

    #[test]
    fn test_load_env_file_sets_variables() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        std::fs::write(&path, "MAP_BENCH_TEST_ONLY_VAR=loaded\n").unwrap();

        EnvManager::load_env_file_from(&path, false).unwrap();
        assert_eq!(std::env::var("MAP_BENCH_TEST_ONLY_VAR").unwrap(), "loaded");
        std::env::remove_var("MAP_BENCH_TEST_ONLY_VAR");
    }
}
