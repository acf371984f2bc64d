//! CLI argument definitions for the registration desk.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "checkin",
    version,
    about = "Passenger registration desk - collect and validate a registration form",
    long_about = "Collect passenger registration data through a console prompt loop.\n\n\
                  Each field is checked by its own rule, and destination-dependent\n\
                  offers (flight time ranges, WIFI bundles) are checked as pairs.\n\
                  Invalid fields are re-prompted until the whole form is consistent."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive registration form.
    Register(RegisterArgs),

    /// List the destinations, flight time ranges, and WIFI bundles on offer.
    Catalog,

    /// Check the compiled-in catalogs for internal consistency.
    Doctor,
}

#[derive(Parser)]
pub struct RegisterArgs {
    /// Keep previous output on screen instead of clearing between passes.
    #[arg(long = "no-clear")]
    pub no_clear: bool,

    /// Permit entered values in logs (redacted by default).
    #[arg(long = "log-data")]
    pub log_data: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
