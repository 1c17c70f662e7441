use crate::core::reassembler::reassemble;
use crate::core::scanner::scan_parts;
use crate::core::sequence::validate_sequence;
use crate::core::target::resolve_target;
use crate::core::{GroupOutcome, JoinOptions, PartGroup, RunSummary, Workspace};
use crate::utils::error::{JoinError, Result};

/// Drives one invocation: scan, then validate, resolve and reassemble each
/// group in base-name order.
///
/// Group-level problems become `Skipped` or `Failed` outcomes and the next
/// group is processed. Only fatal errors (an unreadable part mid-write) are
/// returned as `Err`.
pub struct JoinEngine<W: Workspace> {
    workspace: W,
    options: JoinOptions,
}

impl<W: Workspace> JoinEngine<W> {
    pub fn new(workspace: W, options: JoinOptions) -> Self {
        Self { workspace, options }
    }

    pub fn workspace(&self) -> &W {
        &self.workspace
    }

    pub fn run(&self) -> Result<RunSummary> {
        tracing::debug!(
            "Joining parts in {} (force: {}, dry run: {})",
            self.workspace.root().display(),
            self.options.force,
            self.options.dry_run
        );

        let groups = match scan_parts(&self.workspace) {
            Ok(groups) => groups,
            Err(e) => {
                tracing::error!("{}", e);
                println!("{}", e);
                Vec::new()
            }
        };

        let mut summary = RunSummary::default();
        for group in groups {
            let outcome = self.process_group(group)?;
            summary.outcomes.push(outcome);
        }

        tracing::info!(
            "Done: {} joined, {} planned, {} skipped, {} failed",
            summary.joined(),
            summary.planned(),
            summary.skipped(),
            summary.failed()
        );

        Ok(summary)
    }

    fn process_group(&self, group: PartGroup) -> Result<GroupOutcome> {
        let PartGroup { base, parts } = group;

        if base.is_empty() {
            let reason = JoinError::EmptyBaseName {
                part: parts.first().cloned().unwrap_or_default(),
            };
            return Ok(skip(base, reason));
        }

        if let Err(reason) = validate_sequence(&base, &parts) {
            return Ok(skip(base, reason));
        }

        let target = match resolve_target(&self.workspace, &base, self.options.force) {
            Ok(target) => target,
            Err(reason @ JoinError::TargetExists { .. }) => return Ok(skip(base, reason)),
            Err(reason) => return Ok(fail(base, reason)),
        };

        let reassembly =
            match reassemble(&self.workspace, &target, &parts, self.options.dry_run) {
                Ok(reassembly) => reassembly,
                Err(e) if e.is_fatal() => {
                    tracing::error!("{}", e);
                    return Err(e);
                }
                Err(reason) => return Ok(fail(base, reason)),
            };

        if self.options.dry_run {
            println!(
                "dry run: would create {} from {} parts",
                target,
                parts.len()
            );
            return Ok(GroupOutcome::Planned {
                base,
                target,
                parts: parts.len(),
            });
        }

        println!("file created: {}", target);
        for part in &reassembly.removed {
            println!("file removed: {}", part);
        }
        for failure in &reassembly.remove_failures {
            println!("{}", failure);
        }

        Ok(GroupOutcome::Joined {
            base,
            target,
            bytes_written: reassembly.bytes_written,
            removed: reassembly.removed,
            remove_failures: reassembly.remove_failures,
        })
    }
}

fn skip(base: String, reason: JoinError) -> GroupOutcome {
    tracing::warn!("Skipping '{}': {}", base, reason);
    println!("{}", reason);
    GroupOutcome::Skipped { base, reason }
}

fn fail(base: String, reason: JoinError) -> GroupOutcome {
    tracing::error!("Failed to join '{}': {}", base, reason);
    println!("{}", reason);
    GroupOutcome::Failed { base, reason }
}
