use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A flat directory the joiner works in. Names are relative to `root()`.
pub trait Workspace {
    type Sink: Write;

    fn root(&self) -> &Path;

    /// Names of the direct entries that are not directories.
    fn list_files(&self) -> io::Result<Vec<String>>;

    fn exists(&self, name: &str) -> io::Result<bool>;

    /// Fails with `AlreadyExists` instead of truncating.
    fn create_new(&self, name: &str) -> io::Result<Self::Sink>;

    fn read(&self, name: &str) -> io::Result<Vec<u8>>;

    fn remove(&self, name: &str) -> io::Result<()>;
}

pub trait ConfigProvider {
    fn working_dir(&self) -> io::Result<PathBuf>;
    fn force(&self) -> bool;
    fn dry_run(&self) -> bool;
}
