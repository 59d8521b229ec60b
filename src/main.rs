//! dem CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use dem::cli::{Cli, CommandDispatcher};
use dem::store::LocalDevEnvStore;
use dem::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("dem=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dem=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("dem starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Determine the dem home directory
    let home = cli
        .home
        .clone()
        .unwrap_or_else(LocalDevEnvStore::default_home);

    // Create UI
    let mut ui = create_ui(!cli.non_interactive, output_mode);

    // Dispatch command
    let dispatcher = CommandDispatcher::new(home);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            if let Some(hint) = e.engine_hint() {
                ui.message(&format!("Hint: {}", hint));
            }
            ExitCode::from(1)
        }
    }
}
