use crate::utils::error::{JoinError, Result};

/// Name of the part at 1-based `position`.
pub fn part_name(base: &str, position: usize) -> String {
    format!("{}.{:03}", base, position)
}

/// Checks that sorted `parts` are exactly `base.001`, `base.002`, ... with no
/// gap or duplicate. Stops at the first mismatch.
pub fn validate_sequence(base: &str, parts: &[String]) -> Result<()> {
    for (index, found) in parts.iter().enumerate() {
        let expected = part_name(base, index + 1);
        if *found != expected {
            return Err(JoinError::Sequence {
                expected,
                found: found.clone(),
                position: index + 1,
            });
        }
    }

    Ok(())
}
