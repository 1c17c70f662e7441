use crate::core::Workspace;
use crate::utils::error::{JoinError, Result};

/// Highest numbered alternative tried in force mode.
pub const MAX_RENAME_ATTEMPTS: usize = 999;

/// Splits on the last dot: `("archive.tar", ".gz")`, or `(name, "")` without one.
pub fn split_extension(target: &str) -> (&str, &str) {
    match target.rfind('.') {
        Some(dot) => target.split_at(dot),
        None => (target, ""),
    }
}

/// Returns the name to join into.
///
/// A free `target` is used as-is. When it is taken, non-force mode reports
/// `TargetExists`; force mode probes `stem-001.ext` through `stem-999.ext`.
pub fn resolve_target<W: Workspace>(workspace: &W, target: &str, force: bool) -> Result<String> {
    if !probe(workspace, target)? {
        return Ok(target.to_string());
    }

    let collision = JoinError::TargetExists {
        target: target.to_string(),
    };
    if !force {
        return Err(collision);
    }
    println!("{}", collision);
    tracing::debug!("Looking for an alternative to '{}'", target);

    let (stem, extension) = split_extension(target);
    for attempt in 1..=MAX_RENAME_ATTEMPTS {
        let candidate = format!("{}-{:03}{}", stem, attempt, extension);
        if !probe(workspace, &candidate)? {
            tracing::debug!("Using '{}' instead of '{}'", candidate, target);
            return Ok(candidate);
        }
    }

    Err(JoinError::RenameExhausted {
        target: target.to_string(),
    })
}

fn probe<W: Workspace>(workspace: &W, name: &str) -> Result<bool> {
    workspace.exists(name).map_err(|source| JoinError::Stat {
        target: name.to_string(),
        source,
    })
}
