use crate::domain::ports::Workspace;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::io::{self, Write};
use std::path::Path;
use std::rc::Rc;

type Files = Rc<RefCell<BTreeMap<String, Vec<u8>>>>;

/// In-memory `Workspace` that can be told to fail individual operations.
#[derive(Default)]
pub struct MemoryWorkspace {
    files: Files,
    unreadable: bool,
    failing_stats: RefCell<HashSet<String>>,
    failing_reads: RefCell<HashSet<String>>,
    failing_removes: RefCell<HashSet<String>>,
    failing_writes: RefCell<HashSet<String>>,
}

impl MemoryWorkspace {
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let workspace = Self::default();
        for (name, content) in files {
            workspace.insert(name, content);
        }
        workspace
    }

    pub fn unreadable() -> Self {
        Self {
            unreadable: true,
            ..Self::default()
        }
    }

    pub fn insert(&self, name: &str, content: &str) {
        self.files
            .borrow_mut()
            .insert(name.to_string(), content.as_bytes().to_vec());
    }

    pub fn content(&self, name: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(name).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        self.files.borrow().keys().cloned().collect()
    }

    pub fn fail_stat(&self, name: &str) {
        self.failing_stats.borrow_mut().insert(name.to_string());
    }

    pub fn fail_read(&self, name: &str) {
        self.failing_reads.borrow_mut().insert(name.to_string());
    }

    pub fn fail_remove(&self, name: &str) {
        self.failing_removes.borrow_mut().insert(name.to_string());
    }

    pub fn fail_write(&self, name: &str) {
        self.failing_writes.borrow_mut().insert(name.to_string());
    }
}

fn denied(name: &str) -> io::Error {
    io::Error::new(io::ErrorKind::PermissionDenied, format!("{} is locked", name))
}

pub struct MemorySink {
    files: Files,
    name: String,
    broken: bool,
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.broken {
            return Err(io::Error::new(io::ErrorKind::Other, "no space left on device"));
        }
        self.files
            .borrow_mut()
            .entry(self.name.clone())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Workspace for MemoryWorkspace {
    type Sink = MemorySink;

    fn root(&self) -> &Path {
        Path::new("memory")
    }

    fn list_files(&self) -> io::Result<Vec<String>> {
        if self.unreadable {
            return Err(denied("memory"));
        }
        Ok(self.names())
    }

    fn exists(&self, name: &str) -> io::Result<bool> {
        if self.failing_stats.borrow().contains(name) {
            return Err(denied(name));
        }
        Ok(self.files.borrow().contains_key(name))
    }

    fn create_new(&self, name: &str) -> io::Result<MemorySink> {
        let mut files = self.files.borrow_mut();
        if files.contains_key(name) {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, name.to_string()));
        }
        files.insert(name.to_string(), Vec::new());

        Ok(MemorySink {
            files: Rc::clone(&self.files),
            name: name.to_string(),
            broken: self.failing_writes.borrow().contains(name),
        })
    }

    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        if self.failing_reads.borrow().contains(name) {
            return Err(denied(name));
        }
        self.files
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, name.to_string()))
    }

    fn remove(&self, name: &str) -> io::Result<()> {
        if self.failing_removes.borrow().contains(name) {
            return Err(denied(name));
        }
        self.files
            .borrow_mut()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, name.to_string()))
    }
}
