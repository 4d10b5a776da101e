use std::io;
use std::path::{Path, PathBuf};

/// A filesystem access that failed while building the tree.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("`{}` does not exist", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("`{}` disappeared during the scan", .path.display())]
    Vanished {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("permission denied reading `{}`", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Classify a failed listing or stat of `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }

    /// Like [`ScanError::from_io`], for an entry that a listing just reported.
    /// A `NotFound` here means it was removed between the listing and the stat.
    pub fn from_listed_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            return Self::Vanished {
                path: path.to_path_buf(),
                source,
            };
        }
        Self::from_io(path, source)
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path, .. }
            | Self::Vanished { path, .. }
            | Self::PermissionDenied { path, .. }
            | Self::Io { path, .. } => path,
        }
    }
}

/// Insertion into a [`crate::models::Tree`] that would break its shape.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("no node for parent `{}`", .0.display())]
    MissingParent(PathBuf),

    #[error("`{}` is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("`{}` is already in the tree", .0.display())]
    DuplicatePath(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("cannot write output")]
    Output(#[source] io::Error),
}

impl Error {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidArgument(_) => 2,
            Self::Scan(_) | Self::Tree(_) | Self::Output(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
