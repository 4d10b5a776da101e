pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod fs;
pub mod models;
pub mod size;

use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::core::render::{EntryStyle, write_summary, write_tree};
use crate::core::walk::build_tree;
use crate::fs::FileSystem;

pub use crate::error::{Error, Result};

/// Final path segment, or the whole path when there is none (`.`, `/`).
pub fn root_display_name(root_path: &Path) -> String {
    root_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root_path.as_os_str().to_string_lossy().into_owned())
}

/// Scan `config.path`, then print the tree and, if asked, the summary line.
///
/// Nothing is written unless the scan succeeds.
pub async fn pine<F, W>(fs: &F, config: &Config, style: &dyn EntryStyle, out: &mut W) -> Result<()>
where
    F: FileSystem + ?Sized,
    W: Write + ?Sized,
{
    let tree = build_tree(fs, &config.path, &config.build).await?;

    write_tree(out, &tree, style, &config.render).map_err(Error::Output)?;
    if config.show_totals {
        write_summary(out, &tree.totals()).map_err(Error::Output)?;
    }
    out.flush().map_err(Error::Output)
}
