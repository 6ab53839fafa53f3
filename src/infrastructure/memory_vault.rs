//! In-memory vault for tests and embedding

use crate::domain::{join_path, VaultEntry};
use crate::error::{HatDailyError, Result};
use crate::infrastructure::Vault;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

/// Vault held entirely in memory.
///
/// Folders are created implicitly for every file path, like a directory
/// tree would.
#[derive(Debug, Default)]
pub struct MemoryVault {
    files: RefCell<BTreeMap<String, String>>,
    folders: RefCell<BTreeSet<String>>,
    create_count: RefCell<usize>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vault from `(path, content)` pairs
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let vault = Self::new();
        for (path, content) in files {
            vault.insert(path, content);
        }
        vault
    }

    /// Put a file in place, replacing any previous content
    pub fn insert(&self, path: &str, content: &str) {
        self.add_parent_folders(path);
        self.files
            .borrow_mut()
            .insert(path.to_string(), content.to_string());
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.borrow().contains_key(path)
    }

    pub fn file_paths(&self) -> Vec<String> {
        self.files.borrow().keys().cloned().collect()
    }

    /// Number of successful `create` calls
    pub fn create_count(&self) -> usize {
        *self.create_count.borrow()
    }

    fn add_parent_folders(&self, path: &str) {
        let mut folders = self.folders.borrow_mut();
        let segments: Vec<&str> = path.split('/').collect();
        let mut current = String::new();
        for segment in &segments[..segments.len().saturating_sub(1)] {
            current = join_path(&current, segment);
            folders.insert(current.clone());
        }
    }
}

impl Vault for MemoryVault {
    fn list_all(&self) -> Result<Vec<VaultEntry>> {
        let folders = self.folders.borrow();
        let files = self.files.borrow();
        let entries = folders
            .iter()
            .map(|path| VaultEntry::folder(path))
            .chain(files.keys().map(|path| VaultEntry::file(path)))
            .collect();
        Ok(entries)
    }

    fn get_by_path(&self, path: &str) -> Option<VaultEntry> {
        if self.files.borrow().contains_key(path) {
            Some(VaultEntry::file(path))
        } else if self.folders.borrow().contains(path) {
            Some(VaultEntry::folder(path))
        } else {
            None
        }
    }

    fn read(&self, file: &VaultEntry) -> Result<String> {
        self.content(&file.path)
            .ok_or_else(|| HatDailyError::Vault(format!("File not found: {}", file.path)))
    }

    fn create(&self, path: &str, content: &str) -> Result<()> {
        if self.get_by_path(path).is_some() {
            return Err(HatDailyError::Vault(format!(
                "File already exists: {}",
                path
            )));
        }
        self.insert(path, content);
        *self.create_count.borrow_mut() += 1;
        Ok(())
    }

    fn rename(&self, file: &VaultEntry, new_path: &str) -> Result<()> {
        if self.get_by_path(new_path).is_some() {
            return Err(HatDailyError::Vault(format!(
                "Destination already exists: {}",
                new_path
            )));
        }
        let content = self
            .files
            .borrow_mut()
            .remove(&file.path)
            .ok_or_else(|| {
                HatDailyError::Vault(format!("Cannot move missing file: {}", file.path))
            })?;
        self.insert(new_path, &content);
        Ok(())
    }

    fn create_folder(&self, path: &str) -> Result<()> {
        if self.files.borrow().contains_key(path) {
            return Err(HatDailyError::Vault(format!(
                "A file exists at {}",
                path
            )));
        }
        self.add_parent_folders(path);
        self.folders.borrow_mut().insert(path.to_string());
        Ok(())
    }
}
