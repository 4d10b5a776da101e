use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::core::walk::DepthLimit;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "pine")]
#[command(about = "Print a directory as an indented tree", long_about = None)]
pub struct Cli {
    /// Root path to print (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Number of levels to descend below the root's listing (integer or `unbounded`)
    #[arg(short, long, value_name = "DEPTH", allow_negative_numbers = true, value_parser = parse_depth)]
    pub depth: Option<DepthLimit>,

    /// Print directory and file counts with the total size
    #[arg(short, long)]
    pub size: bool,

    /// When to color entry names
    #[arg(long, value_enum, value_name = "WHEN", default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Omit the blank line that closes each branch
    #[arg(long)]
    pub compact: bool,
}

fn parse_depth(raw: &str) -> crate::error::Result<DepthLimit> {
    raw.parse()
}
