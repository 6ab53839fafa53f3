//! Pane hosts: where the three-pane view is shown

use crate::domain::PaneContent;
use crate::error::{HatDailyError, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

const PANE_NAMES: [&str; 3] = ["left", "middle", "right"];

/// Host that lays out side-by-side panes
pub trait Workspace {
    /// Close whatever the workspace currently shows
    fn detach_all(&mut self) -> Result<()>;

    /// Show the given panes side by side, left to right
    fn open_side_by_side(&mut self, panes: &[PaneContent]) -> Result<()>;
}

/// Opens the pane files in an external editor.
///
/// Each invocation starts a fresh editor process, so there is nothing to
/// detach. Empty panes are skipped since an editor cannot show them; use a
/// split flag in the command (`vim -O`, `nvim -O`) to get the side-by-side
/// layout.
pub struct EditorWorkspace {
    command: String,
    root: PathBuf,
}

impl EditorWorkspace {
    pub fn new(editor_command: String, root: PathBuf) -> Self {
        EditorWorkspace {
            command: editor_command,
            root,
        }
    }

    /// Program and arguments for the given pane files
    fn build_command(&self, panes: &[PaneContent]) -> (String, Vec<String>) {
        let (program, mut args) = self.parse_command();
        for pane in panes {
            if let PaneContent::File(entry) = pane {
                let full = entry
                    .path
                    .split('/')
                    .fold(self.root.clone(), |acc, segment| acc.join(segment));
                args.push(full.to_string_lossy().to_string());
            }
        }
        (program, args)
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            return ("notepad".to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}

impl Workspace for EditorWorkspace {
    fn detach_all(&mut self) -> Result<()> {
        Ok(())
    }

    fn open_side_by_side(&mut self, panes: &[PaneContent]) -> Result<()> {
        let (program, args) = self.build_command(panes);
        tracing::debug!(program = %program, ?args, "launching editor");

        #[cfg(windows)]
        let status = Command::new("cmd").arg("/C").arg(&program).args(&args).status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&args).status();

        let status = status.map_err(|e| {
            HatDailyError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(HatDailyError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }
        Ok(())
    }
}

/// Writes the layout as text, one pane per line
pub struct PrintWorkspace<W: Write> {
    out: W,
}

impl<W: Write> PrintWorkspace<W> {
    pub fn new(out: W) -> Self {
        PrintWorkspace { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Workspace for PrintWorkspace<W> {
    fn detach_all(&mut self) -> Result<()> {
        Ok(())
    }

    fn open_side_by_side(&mut self, panes: &[PaneContent]) -> Result<()> {
        for (idx, pane) in panes.iter().enumerate() {
            let name = PANE_NAMES.get(idx).copied().unwrap_or("extra");
            match pane {
                PaneContent::File(entry) => writeln!(self.out, "{:<6}  {}", name, entry.path)?,
                PaneContent::Empty => writeln!(self.out, "{:<6}  (empty)", name)?,
            }
        }
        Ok(())
    }
}

/// Calls seen by a [`RecordingWorkspace`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceCall {
    DetachAll,
    Open(Vec<PaneContent>),
}

/// Remembers every call, for tests
#[derive(Debug, Default)]
pub struct RecordingWorkspace {
    pub calls: Vec<WorkspaceCall>,
}

impl Workspace for RecordingWorkspace {
    fn detach_all(&mut self) -> Result<()> {
        self.calls.push(WorkspaceCall::DetachAll);
        Ok(())
    }

    fn open_side_by_side(&mut self, panes: &[PaneContent]) -> Result<()> {
        self.calls.push(WorkspaceCall::Open(panes.to_vec()));
        Ok(())
    }
}
