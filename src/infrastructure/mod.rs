//! Infrastructure layer - External I/O and persistence

pub mod clock;
pub mod config;
pub mod memory_vault;
pub mod notice;
#[cfg(test)]
pub(crate) mod test_env;
pub mod vault;
pub mod workspace;

pub use clock::{clock_from_env, Clock, FixedClock, SystemClock};
pub use config::Settings;
pub use memory_vault::MemoryVault;
pub use notice::{ConsoleNotifier, NoticeLevel, Notifier, RecordingNotifier};
pub use vault::{ensure_folder, files_under, FileSystemVault, Vault};
pub use workspace::{
    EditorWorkspace, PrintWorkspace, RecordingWorkspace, Workspace, WorkspaceCall,
};
