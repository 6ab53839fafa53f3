//! Resolve and present the three-pane journal view

use crate::application::{get_or_create, Host};
use crate::domain::{select_prior, DateFormat, Granularity, PaneAssignment};
use crate::error::Result;
use crate::infrastructure::{files_under, Settings, Workspace};

/// Resolve the panes for `granularity` and show them in `workspace`
pub fn open_view(
    host: &Host<'_>,
    workspace: &mut dyn Workspace,
    settings: &Settings,
    granularity: Granularity,
) -> Result<PaneAssignment> {
    let assignment = resolve_panes(host, settings, granularity)?;
    present(workspace, &assignment)?;
    Ok(assignment)
}

/// Work out what each pane shows, creating the current and parent
/// period notes when they do not exist yet.
///
/// Nothing is created when the journal folder is unset or a date pattern
/// does not compile.
pub fn resolve_panes(
    host: &Host<'_>,
    settings: &Settings,
    granularity: Granularity,
) -> Result<PaneAssignment> {
    let folder = settings.require_daily_folder()?;
    let format = DateFormat::compile(settings.format_for(granularity))?;
    let parent = granularity
        .parent()
        .map(|parent| DateFormat::compile(settings.format_for(parent)).map(|f| (parent, f)))
        .transpose()?;

    let now = host.clock.now();
    let today = now.date();

    let candidates = files_under(host.vault, folder)?;
    let left = select_prior(granularity, &format, &candidates, now);

    let middle = get_or_create(
        host,
        &format.format(today),
        settings.template_for(granularity),
        folder,
    )?;

    let right = match parent {
        Some((parent, parent_format)) => get_or_create(
            host,
            &parent_format.format(today),
            settings.template_for(parent),
            folder,
        )?,
        None => None,
    };

    tracing::debug!(
        %granularity,
        left = ?left.as_ref().map(|e| &e.path),
        middle = ?middle.as_ref().map(|e| &e.path),
        right = ?right.as_ref().map(|e| &e.path),
        "resolved panes"
    );

    Ok(PaneAssignment::new(left, middle, right))
}

/// Clear the workspace, then open the three panes left to right
pub fn present(workspace: &mut dyn Workspace, assignment: &PaneAssignment) -> Result<()> {
    workspace.detach_all()?;
    let panes = assignment.panes().map(Clone::clone);
    workspace.open_side_by_side(&panes)
}
