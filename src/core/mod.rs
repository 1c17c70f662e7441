pub mod engine;
pub mod reassembler;
pub mod scanner;
pub mod sequence;
pub mod target;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{GroupOutcome, JoinOptions, PartGroup, RunSummary};
pub use crate::domain::ports::{ConfigProvider, Workspace};
pub use crate::utils::error::Result;
