//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names and help
//! text.  No generation logic lives here.

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "jsforge",
    bin_name = "jsforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate an ES6 project skeleton from a JSON template",
    long_about = "jsforge reads templates/<TEMPLATE>.json and writes a ready-to-install \
                  project to generated/<projectName>/: one ES6 class per declared class, \
                  a main.js importing all of them, SCSS partials and the boilerplate bundle.",
    after_help = "EXAMPLES:\n\
        \x20 jsforge demo\n\
        \x20 jsforge -v demo\n\
        \x20 jsforge --config ./jsforge.toml shop",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Template name, without the `.json` extension.
    #[arg(value_name = "TEMPLATE", help = "Template name (templates/<TEMPLATE>.json)")]
    pub template: String,
}
