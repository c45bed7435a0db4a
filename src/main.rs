//! env2json CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use env2json::cli::{normalize_args, Cli, ConvertCommand, ConvertOptions};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs always go to stderr; stdout carries only the JSON.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("env2json=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("env2json=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };
    init_tracing(cli.debug);

    tracing::debug!("env2json starting with args: {:?}", cli);

    let command = ConvertCommand::new(ConvertOptions::from(&cli));
    let mut stdout = std::io::stdout().lock();

    match command.execute(&mut stdout) {
        Ok(summary) => {
            tracing::debug!("Converted {} variables", summary.entries);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}
