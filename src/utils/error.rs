use thiserror::Error;

#[derive(Error, Debug)]
pub enum JoinError {
    #[error("invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("failed to read directory '{path}': {source}")]
    DirectoryRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("wrong file name found. expected: '{expected}', found: '{found}', file number: #{position}")]
    Sequence {
        expected: String,
        found: String,
        position: usize,
    },

    #[error("part '{part}' has no base name to join into")]
    EmptyBaseName { part: String },

    #[error("file '{target}' already exists")]
    TargetExists { target: String },

    #[error("failed to stat file '{target}': {source}")]
    Stat {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to find new target file name, target: '{target}'")]
    RenameExhausted { target: String },

    #[error("failed to create file '{target}': {source}")]
    Create {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file '{target}': {source}")]
    Write {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read part '{part}': {source}")]
    PartRead {
        part: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove file '{part}': {source}")]
    Remove {
        part: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    FileSystem,
    Sequence,
    Collision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl JoinError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            JoinError::InvalidArgument { .. } => ErrorCategory::Argument,
            JoinError::Sequence { .. } | JoinError::EmptyBaseName { .. } => {
                ErrorCategory::Sequence
            }
            JoinError::TargetExists { .. } | JoinError::RenameExhausted { .. } => {
                ErrorCategory::Collision
            }
            JoinError::DirectoryRead { .. }
            | JoinError::Stat { .. }
            | JoinError::Create { .. }
            | JoinError::Write { .. }
            | JoinError::PartRead { .. }
            | JoinError::Remove { .. } => ErrorCategory::FileSystem,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            JoinError::Sequence { .. }
            | JoinError::EmptyBaseName { .. }
            | JoinError::TargetExists { .. }
            | JoinError::Remove { .. } => ErrorSeverity::Low,
            JoinError::InvalidArgument { .. } | JoinError::DirectoryRead { .. } => {
                ErrorSeverity::Medium
            }
            JoinError::Stat { .. }
            | JoinError::RenameExhausted { .. }
            | JoinError::Create { .. }
            | JoinError::Write { .. } => ErrorSeverity::High,
            JoinError::PartRead { .. } => ErrorSeverity::Critical,
        }
    }

    /// Errors that stop the whole run instead of a single group.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            JoinError::InvalidArgument { .. } | JoinError::PartRead { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            JoinError::InvalidArgument { field, reason } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            JoinError::PartRead { part, .. } => {
                format!("Could not read part '{}', joining stopped", part)
            }
            JoinError::RenameExhausted { target } => {
                format!("No free alternative name left for '{}'", target)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            JoinError::InvalidArgument { .. } => {
                "Run with --help to see the accepted flags and arguments"
            }
            JoinError::DirectoryRead { .. } => "Check that the directory exists and is readable",
            JoinError::Sequence { .. } => "Make sure every part from .001 upwards is present",
            JoinError::EmptyBaseName { .. } => "Rename the part so it carries a base name",
            JoinError::TargetExists { .. } => {
                "Move the existing file away or rerun with --force to pick a new name"
            }
            JoinError::RenameExhausted { .. } => {
                "Clean up the numbered copies of the target before rerunning"
            }
            JoinError::Stat { .. } | JoinError::Create { .. } | JoinError::Write { .. } => {
                "Check permissions and free space in the working directory"
            }
            JoinError::PartRead { .. } => {
                "The parts were kept; remove the partial target and rerun once the part is readable"
            }
            JoinError::Remove { .. } => "The joined file is complete; delete the leftover part by hand",
        }
    }
}

pub type Result<T> = std::result::Result<T, JoinError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_sequence_error_message() {
        let err = JoinError::Sequence {
            expected: "base.002".to_string(),
            found: "base.003".to_string(),
            position: 2,
        };
        assert_eq!(
            err.to_string(),
            "wrong file name found. expected: 'base.002', found: 'base.003', file number: #2"
        );
        assert_eq!(err.category(), ErrorCategory::Sequence);
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_part_read_is_fatal_and_critical() {
        let err = JoinError::PartRead {
            part: "a.001".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.is_fatal());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("a.001"));
    }

    #[test]
    fn test_collision_severity() {
        let exists = JoinError::TargetExists {
            target: "report".to_string(),
        };
        let exhausted = JoinError::RenameExhausted {
            target: "report".to_string(),
        };
        assert_eq!(exists.to_string(), "file 'report' already exists");
        assert_eq!(exists.severity(), ErrorSeverity::Low);
        assert_eq!(exhausted.severity(), ErrorSeverity::High);
        assert_eq!(exhausted.category(), ErrorCategory::Collision);
    }

    #[test]
    fn test_remove_failure_message() {
        let err = JoinError::Remove {
            part: "report.002".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to remove file 'report.002': denied");
        assert_eq!(err.severity(), ErrorSeverity::Low);
    }
}
