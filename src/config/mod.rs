use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "part-joiner")]
#[command(about = "Join numbered file parts (name.001, name.002, ...) back into single files")]
pub struct CliConfig {
    /// Join into the next free name-NNN when the target already exists
    #[arg(short, long)]
    pub force: bool,

    /// Scan and validate only, without creating or removing files
    #[arg(short, long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Directory holding the parts (defaults to the current directory).
    /// Put `--` before a directory whose name starts with `-`
    pub directory: Option<String>,
}

impl ConfigProvider for CliConfig {
    fn working_dir(&self) -> std::io::Result<PathBuf> {
        match &self.directory {
            Some(directory) => Ok(PathBuf::from(directory)),
            None => std::env::current_dir(),
        }
    }

    fn force(&self) -> bool {
        self.force
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(directory) = &self.directory {
            validate_path("directory", directory)?;
        }
        Ok(())
    }
}
