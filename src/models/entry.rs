use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One name yielded by a directory listing, in listing order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
}

/// The parts of a `stat` result the builder cares about.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EntryMetadata {
    pub kind: EntryKind,
    pub len: u64,
}

impl EntryMetadata {
    pub fn directory() -> Self {
        Self {
            kind: EntryKind::Directory,
            len: 0,
        }
    }

    pub fn file(len: u64) -> Self {
        Self {
            kind: EntryKind::File,
            len,
        }
    }

    /// Directories count as zero bytes; only file lengths feed the totals.
    pub fn size_bytes(&self) -> u64 {
        match self.kind {
            EntryKind::Directory => 0,
            EntryKind::File => self.len,
        }
    }
}
