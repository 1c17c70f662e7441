use crate::domain::ports::ConfigProvider;
use crate::utils::error::JoinError;

/// All parts found for one base name, in ascending part-number order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartGroup {
    pub base: String,
    pub parts: Vec<String>,
}

impl PartGroup {
    /// Zero-padded suffixes make the lexicographic order the numeric one.
    pub fn new(base: impl Into<String>, mut parts: Vec<String>) -> Self {
        parts.sort();
        Self {
            base: base.into(),
            parts,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoinOptions {
    pub force: bool,
    pub dry_run: bool,
}

impl JoinOptions {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            force: config.force(),
            dry_run: config.dry_run(),
        }
    }
}

#[derive(Debug)]
pub enum GroupOutcome {
    Joined {
        base: String,
        target: String,
        bytes_written: u64,
        removed: Vec<String>,
        remove_failures: Vec<JoinError>,
    },
    Planned {
        base: String,
        target: String,
        parts: usize,
    },
    Skipped {
        base: String,
        reason: JoinError,
    },
    Failed {
        base: String,
        reason: JoinError,
    },
}

impl GroupOutcome {
    pub fn base(&self) -> &str {
        match self {
            GroupOutcome::Joined { base, .. }
            | GroupOutcome::Planned { base, .. }
            | GroupOutcome::Skipped { base, .. }
            | GroupOutcome::Failed { base, .. } => base,
        }
    }
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<GroupOutcome>,
}

impl RunSummary {
    pub fn joined(&self) -> usize {
        self.count(|o| matches!(o, GroupOutcome::Joined { .. }))
    }

    pub fn planned(&self) -> usize {
        self.count(|o| matches!(o, GroupOutcome::Planned { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, GroupOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, GroupOutcome::Failed { .. }))
    }

    pub fn outcome(&self, base: &str) -> Option<&GroupOutcome> {
        self.outcomes.iter().find(|o| o.base() == base)
    }

    fn count(&self, pred: impl Fn(&GroupOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}
