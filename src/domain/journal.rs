//! Vault entries and vault-relative path helpers

/// Extension of note files
pub const NOTE_EXTENSION: &str = "md";

/// Whether a vault entry is a file or a folder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
}

/// A file or folder in the vault, addressed by its vault-relative path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultEntry {
    /// Vault-relative path with `/` separators (e.g. `Daily/2024-06-14.md`)
    pub path: String,
    /// Last path segment without its extension
    pub basename: String,
    /// File extension without the dot; empty for folders
    pub extension: String,
    pub kind: EntryKind,
}

impl VaultEntry {
    pub fn file(path: &str) -> Self {
        let name = file_name(path);
        let (basename, extension) = match name.rfind('.') {
            Some(idx) if idx > 0 => (&name[..idx], &name[idx + 1..]),
            _ => (name, ""),
        };
        VaultEntry {
            path: path.to_string(),
            basename: basename.to_string(),
            extension: extension.to_string(),
            kind: EntryKind::File,
        }
    }

    pub fn folder(path: &str) -> Self {
        VaultEntry {
            path: path.to_string(),
            basename: file_name(path).to_string(),
            extension: String::new(),
            kind: EntryKind::Folder,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    pub fn is_note(&self) -> bool {
        self.kind == EntryKind::File && self.extension == NOTE_EXTENSION
    }

    /// File name (basename plus extension)
    pub fn name(&self) -> &str {
        file_name(&self.path)
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Strip surrounding slashes from a configured folder path
pub fn normalize_folder(folder: &str) -> &str {
    folder.trim_matches('/')
}

/// Join a vault folder and a child name
pub fn join_path(folder: &str, child: &str) -> String {
    let folder = normalize_folder(folder);
    if folder.is_empty() {
        child.to_string()
    } else {
        format!("{}/{}", folder, child)
    }
}

/// Whether `path` is a descendant of `folder`, matching on whole path
/// segments: `Daily2/x.md` is not inside `Daily`.
pub fn is_within(path: &str, folder: &str) -> bool {
    let folder = normalize_folder(folder);
    if folder.is_empty() {
        return true;
    }
    path.strip_prefix(folder)
        .is_some_and(|rest| rest.starts_with('/'))
}
