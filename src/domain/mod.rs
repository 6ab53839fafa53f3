//! Domain layer - Business logic and domain models

pub mod date_format;
pub mod granularity;
pub mod journal;
pub mod panes;
pub mod recency;

pub use date_format::DateFormat;
pub use granularity::Granularity;
pub use journal::{is_within, join_path, EntryKind, VaultEntry, NOTE_EXTENSION};
pub use panes::{PaneAssignment, PaneContent};
pub use recency::{reference_date, select_prior};
