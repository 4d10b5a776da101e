mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use async_trait::async_trait;
use std::io;
use std::path::Path;

use crate::models::{EntryMetadata, FsEntry};

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// List `dir` in the order the filesystem yields entries.
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>>;

    /// Stat `path`, following symlinks.
    async fn metadata(&self, path: &Path) -> io::Result<EntryMetadata>;
}
