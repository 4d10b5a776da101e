use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{Error, Result, ScanError};
use crate::fs::FileSystem;
use crate::models::{EntryKind, NewNode, Tree};

/// How many directory levels below the root's own listing may be opened.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DepthLimit {
    #[default]
    Unbounded,
    /// `Levels(0)` lists the root and nothing below it.
    Levels(usize),
}

impl DepthLimit {
    fn allows_descent(self) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Levels(remaining) => remaining > 0,
        }
    }

    fn descend(self) -> Self {
        match self {
            Self::Unbounded => Self::Unbounded,
            Self::Levels(remaining) => Self::Levels(remaining.saturating_sub(1)),
        }
    }
}

impl fmt::Display for DepthLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => f.write_str("unbounded"),
            Self::Levels(levels) => write!(f, "{levels}"),
        }
    }
}

impl TryFrom<i64> for DepthLimit {
    type Error = Error;

    fn try_from(depth: i64) -> Result<Self> {
        usize::try_from(depth).map(Self::Levels).map_err(|_| {
            Error::InvalidArgument(format!("depth must be non-negative, got {depth}"))
        })
    }
}

impl FromStr for DepthLimit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if ["unbounded", "inf", "infinity"]
            .iter()
            .any(|word| s.eq_ignore_ascii_case(word))
        {
            return Ok(Self::Unbounded);
        }

        let depth: i64 = s.parse().map_err(|_| {
            Error::InvalidArgument(format!(
                "depth must be a non-negative integer or `unbounded`, got `{s}`"
            ))
        })?;
        Self::try_from(depth)
    }
}

/// Configuration options for building the tree.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub max_depth: DepthLimit,
}

/// Scan `root` and materialize it as a [`Tree`].
///
/// Any listing or stat failure aborts the whole build; no partial tree is
/// returned. A root that is a file yields a tree holding just the root.
pub async fn build_tree<F: FileSystem + ?Sized>(
    fs: &F,
    root: &Path,
    options: &BuildOptions,
) -> Result<Tree> {
    let metadata = fs
        .metadata(root)
        .await
        .map_err(|err| ScanError::from_io(root, err))?;

    let mut tree = Tree::new(root, crate::root_display_name(root), metadata.kind);
    if metadata.kind == EntryKind::Directory {
        walk_dir(fs, root, options.max_depth, &mut tree).await?;
    }

    let totals = tree.totals();
    debug!(
        root = %root.display(),
        max_depth = %options.max_depth,
        directories = totals.directories,
        files = totals.files,
        bytes = totals.bytes,
        "scan complete"
    );
    Ok(tree)
}

async fn walk_dir<F: FileSystem + ?Sized>(
    fs: &F,
    dir: &Path,
    depth: DepthLimit,
    tree: &mut Tree,
) -> Result<()> {
    let entries = fs
        .read_dir(dir)
        .await
        .map_err(|err| ScanError::from_io(dir, err))?;
    debug!(dir = %dir.display(), entries = entries.len(), "listed directory");

    let last_index = entries.len().saturating_sub(1);
    for (index, entry) in entries.into_iter().enumerate() {
        let metadata = fs
            .metadata(&entry.path)
            .await
            .map_err(|err| ScanError::from_listed_io(&entry.path, err))?;

        tree.insert(
            dir,
            NewNode {
                name: entry.name,
                path: entry.path.clone(),
                kind: metadata.kind,
                size_bytes: metadata.size_bytes(),
                is_last_sibling: index == last_index,
            },
        )?;
        trace!(path = %entry.path.display(), kind = ?metadata.kind, "inserted node");

        if metadata.kind == EntryKind::Directory && depth.allows_descent() {
            Box::pin(walk_dir(fs, &entry.path, depth.descend(), tree)).await?;
        }
    }

    Ok(())
}
