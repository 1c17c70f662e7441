use crate::core::Workspace;
use crate::utils::error::{JoinError, Result};
use std::io::Write;

#[derive(Debug, Default)]
pub struct Reassembly {
    pub bytes_written: u64,
    pub removed: Vec<String>,
    pub remove_failures: Vec<JoinError>,
}

/// Concatenates `parts` into a new `target` file, then removes the parts.
///
/// `parts` must already be validated and in order. A dry run touches nothing.
/// A create or write failure leaves every part in place. A `PartRead` error
/// leaves the partial target behind and removes no part; the caller treats it
/// as fatal. Removal failures are collected and do not stop later removals.
pub fn reassemble<W: Workspace>(
    workspace: &W,
    target: &str,
    parts: &[String],
    dry_run: bool,
) -> Result<Reassembly> {
    if dry_run {
        tracing::debug!("Dry run, not writing '{}'", target);
        return Ok(Reassembly::default());
    }

    let bytes_written = write_target(workspace, target, parts)?;
    tracing::info!(
        "Joined {} part(s) into '{}' ({} bytes)",
        parts.len(),
        target,
        bytes_written
    );

    let mut reassembly = Reassembly {
        bytes_written,
        ..Reassembly::default()
    };

    for part in parts {
        match workspace.remove(part) {
            Ok(()) => reassembly.removed.push(part.clone()),
            Err(source) => {
                let err = JoinError::Remove {
                    part: part.clone(),
                    source,
                };
                tracing::warn!("{}", err);
                reassembly.remove_failures.push(err);
            }
        }
    }

    Ok(reassembly)
}

fn write_target<W: Workspace>(workspace: &W, target: &str, parts: &[String]) -> Result<u64> {
    let mut sink = workspace
        .create_new(target)
        .map_err(|source| JoinError::Create {
            target: target.to_string(),
            source,
        })?;

    let write_error = |source| JoinError::Write {
        target: target.to_string(),
        source,
    };

    let mut written = 0u64;
    for part in parts {
        let data = workspace.read(part).map_err(|source| JoinError::PartRead {
            part: part.clone(),
            source,
        })?;
        sink.write_all(&data).map_err(write_error)?;
        written += data.len() as u64;
    }
    sink.flush().map_err(write_error)?;

    Ok(written)
}
