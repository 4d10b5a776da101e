use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pine::cli::{Cli, ColorChoice};
use pine::config::Config;
use pine::core::render::{ColorStyle, EntryStyle, PlainStyle};
use pine::fs::RealFileSystem;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("PINE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match run(Config::from(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pine: {err:#}");
            let code = err
                .downcast_ref::<pine::Error>()
                .map_or(1, pine::Error::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(config: Config) -> anyhow::Result<()> {
    let style: &dyn EntryStyle = match config.color {
        ColorChoice::Always => {
            colored::control::set_override(true);
            &ColorStyle
        }
        ColorChoice::Auto if io::stdout().is_terminal() => &ColorStyle,
        ColorChoice::Auto | ColorChoice::Never => &PlainStyle,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    let mut stdout = io::stdout().lock();
    runtime.block_on(pine::pine(&RealFileSystem, &config, style, &mut stdout))?;
    Ok(())
}
