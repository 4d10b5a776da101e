use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{EntryMetadata, FsEntry};

use super::FileSystem;

#[derive(Clone, Debug)]
enum MockEntry {
    Dir(Vec<String>),
    File(u64),
}

/// In-memory filesystem. Listings come back in the order children were added.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    entries: HashMap<PathBuf, MockEntry>,
    list_errors: HashMap<PathBuf, io::ErrorKind>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    /// Register a directory and its listing. Children still need their own
    /// `add_dir`/`add_file`; a listed child with no entry stats as `NotFound`.
    pub fn add_dir(&self, dir: impl Into<PathBuf>, children: &[&str]) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        let children = children.iter().map(|name| (*name).to_owned()).collect();
        inner.entries.insert(dir.into(), MockEntry::Dir(children));
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, len: u64) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.entries.insert(path.into(), MockEntry::File(len));
    }

    /// Make listing `dir` fail; stat of `dir` still succeeds.
    pub fn set_error(&self, dir: impl Into<PathBuf>, kind: io::ErrorKind) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.list_errors.insert(dir.into(), kind);
    }

    /// Directories listed so far, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        if let Some(kind) = inner.list_errors.get(dir) {
            return Err(io::Error::from(*kind));
        }

        match inner.entries.get(dir) {
            Some(MockEntry::Dir(children)) => Ok(children
                .iter()
                .map(|name| FsEntry {
                    path: dir.join(name),
                    name: name.clone(),
                })
                .collect()),
            Some(MockEntry::File(_)) => Err(io::Error::other(format!(
                "{} is not a directory",
                dir.display()
            ))),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }

    async fn metadata(&self, path: &Path) -> io::Result<EntryMetadata> {
        let inner = self.inner.lock().expect("mock fs lock");
        match inner.entries.get(path) {
            Some(MockEntry::Dir(_)) => Ok(EntryMetadata::directory()),
            Some(MockEntry::File(len)) => Ok(EntryMetadata::file(*len)),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }
}
