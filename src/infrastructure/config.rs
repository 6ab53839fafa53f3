//! Settings persistence and per-granularity lookups

use crate::domain::Granularity;
use crate::error::{HatDailyError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_DIR: &str = ".hatdaily";
const CONFIG_FILE: &str = "config.toml";

/// Per-vault settings, stored in `.hatdaily/config.toml`.
///
/// Keys missing from the file take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub daily_file_format: String,
    pub monthly_file_format: String,
    pub yearly_file_format: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_template_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_template_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly_template_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_folder_path: Option<String>,

    pub editor: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            daily_file_format: "YYYY-MM-DD".to_string(),
            monthly_file_format: "YYYY-MM".to_string(),
            yearly_file_format: "YYYY".to_string(),
            daily_template_path: None,
            monthly_template_path: None,
            yearly_template_path: None,
            daily_folder_path: None,
            editor: Self::detect_default_editor(),
        }
    }
}

impl Settings {
    /// Load settings from .hatdaily/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HatDailyError::NotHatDailyDirectory(path.to_path_buf())
            } else {
                HatDailyError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save settings to .hatdaily/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);
        let config_path = config_dir.join(CONFIG_FILE);

        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// The journal root folder, if configured
    pub fn daily_folder(&self) -> Option<&str> {
        non_empty(&self.daily_folder_path)
    }

    /// The journal root folder, or an error when it is not configured
    pub fn require_daily_folder(&self) -> Result<&str> {
        self.daily_folder()
            .ok_or(HatDailyError::FolderNotConfigured)
    }

    /// The date pattern configured for a granularity
    pub fn format_for(&self, granularity: Granularity) -> &str {
        match granularity {
            Granularity::Daily => &self.daily_file_format,
            Granularity::Monthly => &self.monthly_file_format,
            Granularity::Yearly => &self.yearly_file_format,
        }
    }

    /// The template path configured for a granularity
    pub fn template_for(&self, granularity: Granularity) -> Option<&str> {
        match granularity {
            Granularity::Daily => non_empty(&self.daily_template_path),
            Granularity::Monthly => non_empty(&self.monthly_template_path),
            Granularity::Yearly => non_empty(&self.yearly_template_path),
        }
    }

    pub fn format_mut(&mut self, granularity: Granularity) -> &mut String {
        match granularity {
            Granularity::Daily => &mut self.daily_file_format,
            Granularity::Monthly => &mut self.monthly_file_format,
            Granularity::Yearly => &mut self.yearly_file_format,
        }
    }

    pub fn template_mut(&mut self, granularity: Granularity) -> &mut Option<String> {
        match granularity {
            Granularity::Daily => &mut self.daily_template_path,
            Granularity::Monthly => &mut self.monthly_template_path,
            Granularity::Yearly => &mut self.yearly_template_path,
        }
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Detect default editor from environment or system
    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "vim -O".to_string()
                }
            })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
