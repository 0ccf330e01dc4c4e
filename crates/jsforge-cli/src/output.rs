//! Output management and formatting.

use std::io;

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Framing line around the completion banner and next-steps hint.
pub const SEPARATOR: &str = "-------------------";

/// Writes human-facing lines to stdout.
///
/// Errors go to stderr through `CliError` instead; this type only carries
/// progress, banners and hints, all of which `--quiet` silences.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Progress line, dimmed when colour is on.
    pub fn step(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            msg.to_owned()
        } else {
            msg.dimmed().to_string()
        };
        self.term.write_line(&line)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// `msg` framed by [`SEPARATOR`] lines.
    pub fn banner(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let body = if self.no_color {
            msg.to_owned()
        } else {
            msg.cyan().bold().to_string()
        };
        self.term.write_line(SEPARATOR)?;
        self.term.write_line(&body)?;
        self.term.write_line(SEPARATOR)
    }
}
