//! Note vault access

use crate::domain::{is_within, VaultEntry};
use crate::error::{HatDailyError, Result};
use crate::infrastructure::config::{Settings, CONFIG_DIR};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File store holding the notes.
///
/// Paths are vault-relative and use `/` separators.
pub trait Vault {
    /// Every file and folder in the vault
    fn list_all(&self) -> Result<Vec<VaultEntry>>;

    /// Look up a single entry
    fn get_by_path(&self, path: &str) -> Option<VaultEntry>;

    /// Read a file's content
    fn read(&self, file: &VaultEntry) -> Result<String>;

    /// Create a new file; fails if something already exists at `path`
    fn create(&self, path: &str, content: &str) -> Result<()>;

    /// Move a file; fails if the destination already exists
    fn rename(&self, file: &VaultEntry, new_path: &str) -> Result<()>;

    /// Create a folder and any missing parents; existing folders are fine
    fn create_folder(&self, path: &str) -> Result<()>;
}

/// Note files anywhere below `folder`
pub fn files_under<V: Vault + ?Sized>(vault: &V, folder: &str) -> Result<Vec<VaultEntry>> {
    let mut files: Vec<VaultEntry> = vault
        .list_all()?
        .into_iter()
        .filter(|entry| entry.is_note() && is_within(&entry.path, folder))
        .collect();
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Make sure a folder exists, creating it when absent
pub fn ensure_folder<V: Vault + ?Sized>(vault: &V, path: &str) -> Result<()> {
    match vault.get_by_path(path) {
        Some(entry) if entry.is_folder() => Ok(()),
        Some(_) => Err(HatDailyError::Vault(format!(
            "Cannot create folder {}: a file with that name exists",
            path
        ))),
        None => vault.create_folder(path),
    }
}

/// Vault backed by a directory tree
#[derive(Debug, Clone)]
pub struct FileSystemVault {
    pub root: PathBuf,
}

impl FileSystemVault {
    /// Create a vault rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemVault { root }
    }

    /// Discover the vault root by walking up from the current directory.
    /// HATDAILY_ROOT takes precedence when set.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("HATDAILY_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_config_dir(&path) {
                return Ok(FileSystemVault::new(path));
            } else {
                return Err(HatDailyError::Config(format!(
                    "HATDAILY_ROOT is set to '{}' but no .hatdaily directory found. \
                    Run 'hatdaily init' in that directory or unset HATDAILY_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the vault root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config_dir(&current) {
                return Ok(FileSystemVault::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(HatDailyError::NotHatDailyDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_config_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_config_dir(&self.root)
    }

    /// Create the .hatdaily directory
    pub fn initialize(&self) -> Result<()> {
        let config_dir = self.root.join(CONFIG_DIR);

        if config_dir.exists() {
            return Err(HatDailyError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&config_dir)?;
        Ok(())
    }

    pub fn load_settings(&self) -> Result<Settings> {
        Settings::load_from_dir(&self.root)
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        settings.save_to_dir(&self.root)
    }

    /// Absolute path of a vault-relative path
    pub fn full_path(&self, path: &str) -> PathBuf {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |acc, segment| acc.join(segment))
    }

    fn normalize_relative_path(path: &Path) -> Option<String> {
        let parts: Vec<&str> = path
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }
}

impl Vault for FileSystemVault {
    fn list_all(&self) -> Result<Vec<VaultEntry>> {
        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            entry.depth() == 0
                || entry
                    .file_name()
                    .to_str()
                    .map_or(true, |name| !name.starts_with('.'))
        });

        let mut entries = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                let at = e.path().unwrap_or(&self.root).display().to_string();
                HatDailyError::Vault(format!("Failed to list {}: {}", at, e))
            })?;
            if entry.depth() == 0 {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            let Some(path) = Self::normalize_relative_path(rel) else {
                continue;
            };

            if entry.file_type().is_dir() {
                entries.push(VaultEntry::folder(&path));
            } else if entry.file_type().is_file() {
                entries.push(VaultEntry::file(&path));
            }
        }

        Ok(entries)
    }

    fn get_by_path(&self, path: &str) -> Option<VaultEntry> {
        let full = self.full_path(path);
        if full.is_dir() {
            Some(VaultEntry::folder(path))
        } else if full.is_file() {
            Some(VaultEntry::file(path))
        } else {
            None
        }
    }

    fn read(&self, file: &VaultEntry) -> Result<String> {
        fs::read_to_string(self.full_path(&file.path)).map_err(HatDailyError::Io)
    }

    fn create(&self, path: &str, content: &str) -> Result<()> {
        let full = self.full_path(path);

        if let Some(parent) = full.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    fn rename(&self, file: &VaultEntry, new_path: &str) -> Result<()> {
        let from_path = self.full_path(&file.path);
        let to_path = self.full_path(new_path);

        if !from_path.exists() {
            return Err(HatDailyError::Vault(format!(
                "Cannot move missing file: {}",
                file.path
            )));
        }

        if to_path.exists() {
            return Err(HatDailyError::Vault(format!(
                "Destination already exists: {}",
                new_path
            )));
        }

        if let Some(parent) = to_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::rename(from_path, to_path)?;
        Ok(())
    }

    fn create_folder(&self, path: &str) -> Result<()> {
        fs::create_dir_all(self.full_path(path)).map_err(HatDailyError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::test_env::{env_test_lock, EnvVarRestore};
    use tempfile::TempDir;

    fn vault_with(files: &[&str]) -> (TempDir, FileSystemVault) {
        let temp = TempDir::new().unwrap();
        for file in files {
            let path = temp.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, format!("content of {}", file)).unwrap();
        }
        let vault = FileSystemVault::new(temp.path().to_path_buf());
        (temp, vault)
    }

    fn paths(entries: &[VaultEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.path.as_str()).collect()
    }

    #[test]
    fn test_initialize_creates_config_dir() {
        let temp = TempDir::new().unwrap();
        let vault = FileSystemVault::new(temp.path().to_path_buf());

        assert!(!vault.is_initialized());
        vault.initialize().unwrap();
        assert!(vault.is_initialized());
        assert!(temp.path().join(".hatdaily").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let vault = FileSystemVault::new(temp.path().to_path_buf());

        vault.initialize().unwrap();
        assert!(vault.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".hatdaily")).unwrap();
        let subdir = temp.path().join("Daily").join("2024");
        fs::create_dir_all(&subdir).unwrap();

        let vault = FileSystemVault::discover_from(&subdir).unwrap();
        assert_eq!(vault.root, temp.path());
    }

    #[test]
    fn test_discover_fails_without_config_dir() {
        let temp = TempDir::new().unwrap();

        match FileSystemVault::discover_from(temp.path()).unwrap_err() {
            HatDailyError::NotHatDailyDirectory(_) => {}
            other => panic!("Expected NotHatDailyDirectory error, got {}", other),
        }
    }

    #[test]
    fn test_discover_with_root_env() {
        let _env_lock = env_test_lock();
        let _restore = EnvVarRestore::capture("HATDAILY_ROOT");

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".hatdaily")).unwrap();
        std::env::set_var("HATDAILY_ROOT", temp.path());

        let vault = FileSystemVault::discover().unwrap();
        assert_eq!(vault.root, temp.path());
    }

    #[test]
    fn test_discover_root_env_not_initialized() {
        let _env_lock = env_test_lock();
        let _restore = EnvVarRestore::capture("HATDAILY_ROOT");

        let temp = TempDir::new().unwrap();
        std::env::set_var("HATDAILY_ROOT", temp.path());

        match FileSystemVault::discover().unwrap_err() {
            HatDailyError::Config(msg) => assert!(msg.contains("no .hatdaily directory")),
            other => panic!("Expected Config error, got {}", other),
        }
    }

    #[test]
    fn test_list_all_includes_files_and_folders() {
        let (_temp, vault) = vault_with(&["Daily/2024-06-14.md", "Daily/2024/2024-05/2024-05-01.md"]);

        let mut all = vault.list_all().unwrap();
        all.sort_by(|a, b| a.path.cmp(&b.path));

        assert_eq!(
            paths(&all),
            vec![
                "Daily",
                "Daily/2024",
                "Daily/2024-06-14.md",
                "Daily/2024/2024-05",
                "Daily/2024/2024-05/2024-05-01.md",
            ]
        );
        assert!(all[0].is_folder());
        assert!(all[2].is_note());
    }

    #[test]
    fn test_list_all_skips_hidden_entries() {
        let (_temp, vault) = vault_with(&[".hatdaily/config.toml", ".obsidian/app.json", "Daily/.draft.md", "Daily/2024-06-14.md"]);

        let all = vault.list_all().unwrap();
        let listed = paths(&all);
        assert!(listed.contains(&"Daily/2024-06-14.md"));
        assert!(!listed.iter().any(|p| p.contains(".hatdaily")));
        assert!(!listed.iter().any(|p| p.contains(".obsidian")));
        assert!(!listed.iter().any(|p| p.contains(".draft")));
    }

    #[test]
    fn test_list_all_fails_for_missing_root() {
        let temp = TempDir::new().unwrap();
        let vault = FileSystemVault::new(temp.path().join("gone"));

        match vault.list_all().unwrap_err() {
            HatDailyError::Vault(msg) => {
                assert!(msg.contains("Failed to list"));
                assert!(msg.contains("gone"));
            }
            other => panic!("Expected Vault error, got {}", other),
        }
        assert!(files_under(&vault, "Daily").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_list_all_fails_for_unreadable_folder() {
        use std::os::unix::fs::PermissionsExt;

        let (temp, vault) = vault_with(&["Daily/2024-06-14.md"]);
        let locked = temp.path().join("Daily");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        let readable_anyway = fs::read_dir(&locked).is_ok();

        let result = vault.list_all();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // root ignores permission bits
        if !readable_anyway {
            assert!(matches!(result, Err(HatDailyError::Vault(_))));
        }
    }

    #[test]
    fn test_files_under_respects_segment_boundary() {
        let (_temp, vault) = vault_with(&[
            "Daily/2024-06-14.md",
            "Daily/2024/2024-05/2024-05-01.md",
            "Daily2/2024-06-13.md",
            "Daily/photo.png",
            "Templates/Daily.md",
        ]);

        let files = files_under(&vault, "Daily").unwrap();
        assert_eq!(
            paths(&files),
            vec!["Daily/2024-06-14.md", "Daily/2024/2024-05/2024-05-01.md"]
        );
    }

    #[test]
    fn test_get_by_path() {
        let (_temp, vault) = vault_with(&["Daily/2024-06-14.md"]);

        assert!(vault.get_by_path("Daily").unwrap().is_folder());
        let file = vault.get_by_path("Daily/2024-06-14.md").unwrap();
        assert_eq!(file.basename, "2024-06-14");
        assert!(vault.get_by_path("Daily/missing.md").is_none());
    }

    #[test]
    fn test_create_and_read() {
        let (_temp, vault) = vault_with(&[]);

        vault.create("Daily/2024-06-15.md", "# Today").unwrap();
        let file = vault.get_by_path("Daily/2024-06-15.md").unwrap();
        assert_eq!(vault.read(&file).unwrap(), "# Today");
    }

    #[test]
    fn test_create_refuses_to_overwrite() {
        let (_temp, vault) = vault_with(&["Daily/2024-06-15.md"]);

        assert!(vault.create("Daily/2024-06-15.md", "new").is_err());
        let file = vault.get_by_path("Daily/2024-06-15.md").unwrap();
        assert_eq!(vault.read(&file).unwrap(), "content of Daily/2024-06-15.md");
    }

    #[test]
    fn test_rename_moves_file() {
        let (temp, vault) = vault_with(&["Daily/2024-05-01.md"]);
        let file = vault.get_by_path("Daily/2024-05-01.md").unwrap();

        vault.rename(&file, "Daily/2024/2024-05/2024-05-01.md").unwrap();

        assert!(!temp.path().join("Daily/2024-05-01.md").exists());
        let moved = fs::read_to_string(temp.path().join("Daily/2024/2024-05/2024-05-01.md")).unwrap();
        assert_eq!(moved, "content of Daily/2024-05-01.md");
    }

    #[test]
    fn test_rename_refuses_existing_destination() {
        let (temp, vault) = vault_with(&["Daily/2024-05-01.md", "Daily/2024/2024-05/2024-05-01.md"]);
        let file = vault.get_by_path("Daily/2024-05-01.md").unwrap();

        match vault.rename(&file, "Daily/2024/2024-05/2024-05-01.md").unwrap_err() {
            HatDailyError::Vault(msg) => assert!(msg.contains("Destination already exists")),
            other => panic!("Expected Vault error, got {}", other),
        }
        assert!(temp.path().join("Daily/2024-05-01.md").exists());
    }

    #[test]
    fn test_rename_missing_source() {
        let (_temp, vault) = vault_with(&[]);
        let ghost = VaultEntry::file("Daily/ghost.md");

        assert!(vault.rename(&ghost, "Daily/2024/ghost.md").is_err());
    }

    #[test]
    fn test_ensure_folder_is_idempotent() {
        let (temp, vault) = vault_with(&[]);

        ensure_folder(&vault, "Daily/2024/2024-05").unwrap();
        ensure_folder(&vault, "Daily/2024/2024-05").unwrap();

        assert!(temp.path().join("Daily/2024/2024-05").is_dir());
    }

    #[test]
    fn test_ensure_folder_rejects_file_in_the_way() {
        let (_temp, vault) = vault_with(&["Daily/2024"]);

        assert!(ensure_folder(&vault, "Daily/2024").is_err());
    }

    #[test]
    fn test_save_and_load_settings() {
        let temp = TempDir::new().unwrap();
        let vault = FileSystemVault::new(temp.path().to_path_buf());
        vault.initialize().unwrap();

        let settings = Settings {
            daily_folder_path: Some("Daily".to_string()),
            ..Settings::default()
        };
        vault.save_settings(&settings).unwrap();

        assert_eq!(vault.load_settings().unwrap(), settings);
    }
}
