//! Three-pane layout model

use crate::domain::VaultEntry;

/// What a single pane shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneContent {
    File(VaultEntry),
    Empty,
}

impl From<Option<VaultEntry>> for PaneContent {
    fn from(entry: Option<VaultEntry>) -> Self {
        entry.map_or(PaneContent::Empty, PaneContent::File)
    }
}

/// Left (previous period), middle (current period) and right (parent period)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneAssignment {
    pub left: PaneContent,
    pub middle: PaneContent,
    pub right: PaneContent,
}

impl PaneAssignment {
    pub fn new(
        left: Option<VaultEntry>,
        middle: Option<VaultEntry>,
        right: Option<VaultEntry>,
    ) -> Self {
        PaneAssignment {
            left: left.into(),
            middle: middle.into(),
            right: right.into(),
        }
    }

    /// Panes in left-to-right order
    pub fn panes(&self) -> [&PaneContent; 3] {
        [&self.left, &self.middle, &self.right]
    }
}
