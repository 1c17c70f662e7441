use crate::core::{PartGroup, Workspace};
use crate::utils::error::{JoinError, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Width of the `.NNN` suffix, dot included.
pub const SUFFIX_LEN: usize = 4;

static PART_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[0-9]{3}$").expect("part suffix pattern is valid"));

/// Base name of a part file, or `None` when the name has no `.NNN` suffix.
pub fn base_name(file_name: &str) -> Option<&str> {
    if PART_SUFFIX.is_match(file_name) {
        Some(&file_name[..file_name.len() - SUFFIX_LEN])
    } else {
        None
    }
}

/// Groups the workspace's part files by base name, in ascending base order.
pub fn scan_parts<W: Workspace>(workspace: &W) -> Result<Vec<PartGroup>> {
    let names = workspace
        .list_files()
        .map_err(|source| JoinError::DirectoryRead {
            path: workspace.root().display().to_string(),
            source,
        })?;

    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for name in names {
        let Some(base) = base_name(&name) else {
            continue;
        };
        groups.entry(base.to_string()).or_default().push(name);
    }

    tracing::debug!(
        "Found {} part group(s) in {}",
        groups.len(),
        workspace.root().display()
    );

    Ok(groups
        .into_iter()
        .map(|(base, parts)| PartGroup::new(base, parts))
        .collect())
}
