use std::path::Path;

use anyhow::Context;
use tracing::trace;

use super::filter::IgnoreRules;
use super::render::{child_prefix, entry_line};
use crate::fs::FileSystem;
use crate::models::{EntryKind, FsEntry, ProjectStructure};

/// Walk `root` depth-first and collect the rendered tree.
///
/// The first line is `root_name`; every visible entry adds one line below it.
/// Any directory that cannot be listed aborts the walk.
pub async fn walk_dir<F: FileSystem>(
    fs: &F,
    root: &Path,
    root_name: &str,
    rules: &IgnoreRules,
) -> anyhow::Result<ProjectStructure> {
    let mut structure = ProjectStructure::new(root_name);
    walk_dir_internal(fs, root, "", rules, &mut structure).await?;
    Ok(structure)
}

async fn walk_dir_internal<F: FileSystem>(
    fs: &F,
    dir: &Path,
    prefix: &str,
    rules: &IgnoreRules,
    structure: &mut ProjectStructure,
) -> anyhow::Result<()> {
    trace!(dir = %dir.display(), "listing");
    let entries = fs
        .read_dir(dir)
        .await
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    let ordered = dirs_then_files(entries);

    // Connectors are decided against the unfiltered listing, so the last
    // visible entry keeps `├── ` when a later sibling was ignored.
    let last_index = ordered.len().saturating_sub(1);

    for (index, entry) in ordered.iter().enumerate() {
        if rules.should_ignore(&entry.path) {
            continue;
        }

        let is_last = index == last_index;
        let is_dir = entry.kind == EntryKind::Directory;
        structure.push(entry_line(prefix, is_last, &entry.name, is_dir));

        if is_dir {
            let next_prefix = child_prefix(prefix, is_last);
            Box::pin(walk_dir_internal(
                fs,
                &entry.path,
                &next_prefix,
                rules,
                structure,
            ))
            .await?;
        }
    }

    Ok(())
}

/// Directories sorted by name, then files sorted by name. Anything else is dropped.
fn dirs_then_files(entries: Vec<FsEntry>) -> Vec<FsEntry> {
    let (mut dirs, mut files): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .filter(|entry| entry.kind != EntryKind::Other)
        .partition(|entry| entry.kind == EntryKind::Directory);

    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    files.sort_by(|a, b| a.name.cmp(&b.name));

    dirs.extend(files);
    dirs
}
