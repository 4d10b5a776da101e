use std::path::PathBuf;

use crate::cli::{Cli, ColorChoice};
use crate::core::render::RenderOptions;
use crate::core::walk::BuildOptions;

/// Everything one run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub path: PathBuf,
    pub build: BuildOptions,
    pub render: RenderOptions,
    pub show_totals: bool,
    pub color: ColorChoice,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            build: BuildOptions::default(),
            render: RenderOptions::default(),
            show_totals: false,
            color: ColorChoice::Auto,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            path: cli.path.unwrap_or_else(|| PathBuf::from(".")),
            build: BuildOptions {
                max_depth: cli.depth.unwrap_or_default(),
            },
            render: RenderOptions {
                spacer_lines: !cli.compact,
            },
            show_totals: cli.size,
            color: cli.color,
        }
    }
}
