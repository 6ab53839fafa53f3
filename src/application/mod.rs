//! Application layer - Use cases and orchestration

pub mod archive;
pub mod init;
pub mod manage_config;
pub mod materialize;
pub mod open_view;

pub use archive::{archive_last_month, ArchiveOutcome, ArchiveReport, FailedRelocation, Relocation};
pub use manage_config::ConfigService;
pub use materialize::get_or_create;
pub use open_view::{open_view, present, resolve_panes};

use crate::infrastructure::{Clock, Notifier, Vault};

/// Collaborators every use case runs against
#[derive(Clone, Copy)]
pub struct Host<'a> {
    pub vault: &'a dyn Vault,
    pub clock: &'a dyn Clock,
    pub notifier: &'a dyn Notifier,
}

impl<'a> Host<'a> {
    pub fn new(vault: &'a dyn Vault, clock: &'a dyn Clock, notifier: &'a dyn Notifier) -> Self {
        Host {
            vault,
            clock,
            notifier,
        }
    }
}
