//! Find-or-create a note for a date key

use crate::application::Host;
use crate::domain::{join_path, VaultEntry, NOTE_EXTENSION};
use crate::error::Result;
use crate::infrastructure::files_under;

/// Return the note named `date_key` under `folder`, creating it when absent.
///
/// An existing note anywhere below `folder` (archive subfolders included)
/// wins; otherwise `<folder>/<date_key>.md` is created from the template, or
/// empty when there is none. Calling this twice with the same key creates at
/// most one note.
pub fn get_or_create(
    host: &Host<'_>,
    date_key: &str,
    template_path: Option<&str>,
    folder: &str,
) -> Result<Option<VaultEntry>> {
    if let Some(existing) = files_under(host.vault, folder)?
        .into_iter()
        .find(|file| file.basename == date_key)
    {
        return Ok(Some(existing));
    }

    let content = match template_path {
        Some(path) => load_template(host, path)?,
        None => String::new(),
    };

    let note_path = join_path(folder, &format!("{}.{}", date_key, NOTE_EXTENSION));
    host.vault.create(&note_path, &content)?;
    tracing::info!(path = %note_path, "created note");

    Ok(host
        .vault
        .get_by_path(&note_path)
        .filter(|entry| !entry.is_folder()))
}

/// Template paths may be given without the note extension
pub fn normalize_template_path(path: &str) -> String {
    let suffix = format!(".{}", NOTE_EXTENSION);
    if path.ends_with(&suffix) {
        path.to_string()
    } else {
        format!("{}{}", path, suffix)
    }
}

fn load_template(host: &Host<'_>, template_path: &str) -> Result<String> {
    let fixed = normalize_template_path(template_path);

    match host.vault.get_by_path(&fixed) {
        Some(file) if !file.is_folder() => host.vault.read(&file),
        _ => {
            tracing::warn!(template = %template_path, "template not found");
            host.notifier.warn(&format!(
                "Template not found, check the path: {}",
                template_path
            ));
            Ok(String::new())
        }
    }
}
