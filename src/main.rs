//! prc-verify entry point.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use prc_verify::cli::{Cli, VerifyCommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so stdout carries only the report. Level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("prc_verify=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("prc_verify=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("prc-verify starting with args: {:?}", cli);

    let project_root = cli
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    // Findings never fail the run; neither does a closed stdout.
    if let Err(e) = run(VerifyCommand::new(&project_root, cli)) {
        tracing::warn!("{:#}", e);
    }

    ExitCode::SUCCESS
}

fn run(command: VerifyCommand) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    command.execute(&mut out).with_context(|| {
        format!(
            "could not write report for {}",
            command.project_root().display()
        )
    })?;
    Ok(())
}
