pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::local::LocalWorkspace;
pub use core::engine::JoinEngine;
pub use domain::model::{GroupOutcome, JoinOptions, PartGroup, RunSummary};
pub use utils::error::{JoinError, Result};
