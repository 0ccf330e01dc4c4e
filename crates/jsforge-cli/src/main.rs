//! # jsforge CLI
//!
//! Generates an ES6 project skeleton from `templates/<TEMPLATE>.json`.
//!
//! ## Startup sequence
//!
//! 1. Load `.env` and parse CLI arguments (clap handles `--help` / `--version`).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Run the generation.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Template not found      |
//! |  4   | Configuration error     |

use std::{io::IsTerminal, process::ExitCode};

use clap::Parser;
use tracing::{debug, info};

use crate::{
    cli::{Cli, GlobalArgs},
    config::AppConfig,
    error::CliError,
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod reporter;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here, with exit code 0.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(CliError::config(e), &cli.global),
    };
    debug!(?config, "Configuration resolved");

    let output = OutputManager::new(&cli.global, &config);

    match commands::generate::execute(&cli.template, &config, &output) {
        Ok(summary) => {
            info!(run_id = %summary.run_id, "jsforge completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, &cli.global),
    }
}

/// Translate a `CliError` into a user message and an exit code.
fn handle_error(err: CliError, global: &GlobalArgs) -> ExitCode {
    err.log();

    // stderr, so the message survives a redirected stdout.
    let verbose = global.verbose > 0;
    let msg = if !global.no_color && std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
