use async_trait::async_trait;
use std::io;
use std::path::Path;
use tokio::task;

use crate::models::{EntryKind, EntryMetadata, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || -> io::Result<Vec<FsEntry>> {
            let mut entries = Vec::new();
            for entry in std::fs::read_dir(&dir)? {
                let entry = entry?;
                entries.push(FsEntry {
                    path: entry.path(),
                    name: entry.file_name().to_string_lossy().into_owned(),
                });
            }
            Ok(entries)
        })
        .await
        .map_err(io::Error::other)?
    }

    async fn metadata(&self, path: &Path) -> io::Result<EntryMetadata> {
        let metadata = tokio::fs::metadata(path).await?;
        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        Ok(EntryMetadata {
            kind,
            len: metadata.len(),
        })
    }
}
