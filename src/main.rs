//! lint-docs CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use lint_docs::cli::{Cli, Command, LintCommand};
use lint_docs::ui::{should_use_colors, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("lint_docs=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lint_docs=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("lint-docs starting with args: {:?}", cli);

    let use_color = !cli.no_color && should_use_colors();
    let mut ui = TerminalUI::new(use_color);

    let command = LintCommand::new(cli.lint, use_color);

    match command.execute(&mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            if e.is_configuration_failure() {
                ExitCode::from(2)
            } else {
                ExitCode::from(1)
            }
        }
    }
}
