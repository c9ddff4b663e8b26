//! Arguments and setup shared by every subcommand.

use camino::Utf8PathBuf;
use clap::Args;
use clap::ValueEnum;
use std::io::{IsTerminal, stdout};
use sushi_scan::scan::AppLibrary;

/// Default location of the production SUSHI app library.
const DEFAULT_LIB_PATH: &str = "/srv/sushi/production/master/lib";

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and above messages
    Debug,
    /// All messages including trace
    Trace,
}

/// Control when to use colored output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,
    /// Never use colors
    Never,
    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

impl ColorMode {
    /// Resolves the mode against the actual output stream.
    #[must_use]
    pub fn use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => stdout().is_terminal(),
        }
    }
}

/// Common arguments shared between all subcommands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Directory containing the SUSHI App definition files
    #[arg(long, short = 'l', value_name = "PATH", env = "SUSHI_LIB", default_value = DEFAULT_LIB_PATH)]
    pub lib_path: Utf8PathBuf,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

impl CommonArgs {
    /// Initializes logging and hands back the app library for this run.
    #[must_use]
    pub fn library(&self) -> AppLibrary {
        init_logging(self.log_level);
        AppLibrary::new(self.lib_path.clone())
    }
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .init();
}
