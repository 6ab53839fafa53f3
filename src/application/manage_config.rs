//! Config management use case

use crate::domain::{DateFormat, Granularity};
use crate::error::{HatDailyError, Result};
use crate::infrastructure::{FileSystemVault, Settings};

/// Keys accepted by `get` and `set`, in display order
pub const KEYS: [&str; 8] = [
    "daily_folder_path",
    "daily_file_format",
    "monthly_file_format",
    "yearly_file_format",
    "daily_template_path",
    "monthly_template_path",
    "yearly_template_path",
    "editor",
];

/// Service for reading and changing vault settings
pub struct ConfigService {
    vault: FileSystemVault,
}

impl ConfigService {
    pub fn new(vault: FileSystemVault) -> Self {
        ConfigService { vault }
    }

    /// Get a single setting; unset optional settings read as an empty string
    pub fn get(&self, key: &str) -> Result<String> {
        let settings = self.vault.load_settings()?;
        read_key(&settings, key)
    }

    /// Change a setting.
    ///
    /// Date patterns are checked before saving. An empty value clears an
    /// optional setting.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut settings = self.vault.load_settings()?;
        write_key(&mut settings, key, value)?;
        self.vault.save_settings(&settings)?;
        tracing::info!(key, value, "updated setting");
        Ok(())
    }

    pub fn list(&self) -> Result<Settings> {
        self.vault.load_settings()
    }
}

/// Every setting as `(key, value)` pairs, in display order
pub fn entries(settings: &Settings) -> Vec<(&'static str, String)> {
    KEYS.iter()
        .filter_map(|key| read_key(settings, key).ok().map(|value| (*key, value)))
        .collect()
}

fn read_key(settings: &Settings, key: &str) -> Result<String> {
    if key == "daily_folder_path" {
        return Ok(settings.daily_folder_path.clone().unwrap_or_default());
    }
    if key == "editor" {
        return Ok(settings.editor.clone());
    }
    for granularity in Granularity::ALL {
        if key == granularity.format_key() {
            return Ok(settings.format_for(granularity).to_string());
        }
        if key == granularity.template_key() {
            return Ok(settings.template_for(granularity).unwrap_or_default().to_string());
        }
    }
    Err(unknown_key(key))
}

/// Paths and the editor command are trimmed; date patterns are kept verbatim
/// since whitespace in them is literal text.
fn write_key(settings: &mut Settings, key: &str, value: &str) -> Result<()> {
    if key == "daily_folder_path" {
        settings.daily_folder_path = optional(value.trim());
        return Ok(());
    }
    if key == "editor" {
        let command = value.trim();
        if command.is_empty() {
            return Err(HatDailyError::Config("Editor command cannot be empty".to_string()));
        }
        settings.editor = command.to_string();
        return Ok(());
    }
    for granularity in Granularity::ALL {
        if key == granularity.format_key() {
            DateFormat::compile(value)?;
            *settings.format_mut(granularity) = value.to_string();
            return Ok(());
        }
        if key == granularity.template_key() {
            *settings.template_mut(granularity) = optional(value.trim());
            return Ok(());
        }
    }
    Err(unknown_key(key))
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn unknown_key(key: &str) -> HatDailyError {
    HatDailyError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        KEYS.join(", ")
    ))
}
