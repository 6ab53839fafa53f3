//! Error types for hatdaily

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for hatdaily
#[derive(Debug, Error)]
pub enum HatDailyError {
    #[error("Not a hatdaily directory: {0}")]
    NotHatDailyDirectory(PathBuf),

    #[error("Journal folder is not configured")]
    FolderNotConfigured,

    #[error("Invalid granularity: '{0}'. Valid values are: daily, monthly, yearly")]
    InvalidGranularity(String),

    #[error("Invalid date format '{pattern}': {reason}")]
    InvalidDateFormat { pattern: String, reason: String },

    #[error("Vault error: {0}")]
    Vault(String),

    #[error("Archive incomplete: {0} file(s) could not be moved")]
    ArchiveIncomplete(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Failed to parse config.toml: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl HatDailyError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            HatDailyError::NotHatDailyDirectory(_) => 2,
            HatDailyError::FolderNotConfigured => 3,
            HatDailyError::InvalidGranularity(_) => 4,
            HatDailyError::ArchiveIncomplete(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            HatDailyError::NotHatDailyDirectory(path) => {
                format!(
                    "Not a hatdaily directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'hatdaily init' in your vault to create a config\n\
                    • Navigate to an existing hatdaily vault\n\
                    • Set HATDAILY_ROOT environment variable to your vault path",
                    path.display()
                )
            }
            HatDailyError::FolderNotConfigured => "Journal folder is not configured\n\n\
                Set the folder that holds your daily notes first:\n\
                hatdaily config daily_folder_path Daily"
                .to_string(),
            HatDailyError::InvalidGranularity(value) => {
                format!(
                    "Invalid granularity: '{}'\n\n\
                    Valid values: daily, monthly, yearly\n\
                    Example: hatdaily view monthly",
                    value
                )
            }
            HatDailyError::InvalidDateFormat { pattern, reason } => {
                format!(
                    "Invalid date format '{}': {}\n\n\
                    Supported tokens: YYYY, YY, MMMM, MMM, MM, M, DD, Do, D, dddd, ddd\n\
                    Wrap literal text in brackets, e.g. [Week]-YYYY-MM-DD",
                    pattern, reason
                )
            }
            HatDailyError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR='vim -O')\n\
                    • Configure editor: hatdaily config editor 'vim -O'\n\
                    • Print the layout instead: hatdaily view --print",
                    msg
                )
            }
            HatDailyError::ArchiveIncomplete(count) => {
                format!(
                    "Archive incomplete: {} file(s) could not be moved\n\n\
                    Files that were moved stay in the archive folder.\n\
                    Resolve the listed conflicts and run 'hatdaily archive' again.",
                    count
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using HatDailyError
pub type Result<T> = std::result::Result<T, HatDailyError>;
