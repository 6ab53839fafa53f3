//! Initialize vault use case

use crate::error::Result;
use crate::infrastructure::{FileSystemVault, Settings};
use std::fs;
use std::path::Path;

/// Set up hatdaily in the vault at `path`, optionally naming the journal
/// folder right away.
pub fn init(path: &Path, folder: Option<&str>) -> Result<Settings> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let vault = FileSystemVault::new(path.to_path_buf());
    vault.initialize()?;

    let settings = Settings {
        daily_folder_path: folder
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string),
        ..Settings::default()
    };
    vault.save_settings(&settings)?;

    tracing::info!(root = %path.display(), "initialized vault");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_default_config() {
        let temp = TempDir::new().unwrap();

        let settings = init(temp.path(), None).unwrap();

        assert!(temp.path().join(".hatdaily/config.toml").is_file());
        assert!(settings.daily_folder().is_none());
        assert_eq!(Settings::load_from_dir(temp.path()).unwrap(), settings);
    }

    #[test]
    fn test_init_with_folder() {
        let temp = TempDir::new().unwrap();

        init(temp.path(), Some("Daily")).unwrap();

        let loaded = Settings::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.daily_folder(), Some("Daily"));
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let vault = temp.path().join("notes").join("vault");

        init(&vault, Some("Journal")).unwrap();

        assert!(vault.join(".hatdaily").is_dir());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();

        init(temp.path(), None).unwrap();
        assert!(init(temp.path(), None).is_err());
    }
}
