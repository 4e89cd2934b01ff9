//! Argument types and setup shared by all commands.

use crate::Result;
use camino::Utf8PathBuf;
use clap::{Args, ValueEnum};
use ohno::IntoAppError;
use std::fs;

/// Color mode configuration for output
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
    /// Decide whether standard output should be colored
    #[must_use]
    pub fn use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                use std::io::{IsTerminal, stdout};
                stdout().is_terminal()
            }
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    #[value(alias = "0")]
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    #[value(alias = "1")]
    Info,

    /// Debug, info, warning, and error messages
    #[value(alias = "2")]
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Logging arguments accepted by every command
#[derive(Args, Debug)]
pub struct LoggingArgs {
    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", env = "LOG_LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,

    /// Write diagnostic output to a file instead of standard error
    #[arg(long, value_name = "PATH", env = "LOG_FILE", global = true)]
    pub log_file: Option<Utf8PathBuf>,
}

impl LoggingArgs {
    /// Initialize the logger based on log level and destination
    ///
    /// A logger that is already installed is left in place.
    pub fn init_logging(&self) -> Result<()> {
        let level = match self.log_level {
            LogLevel::None => return Ok(()),
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };

        let env = env_logger::Env::default().filter_or("RUST_LOG", level);
        let mut builder = env_logger::Builder::from_env(env);
        let _ = builder
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(matches!(self.log_level, LogLevel::Debug | LogLevel::Trace));

        if let Some(path) = &self.log_file {
            if let Some(parent) = path.parent()
                && !parent.as_str().is_empty()
            {
                fs::create_dir_all(parent).into_app_err_with(|| format!("creating log directory '{parent}'"))?;
            }

            let file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .into_app_err_with(|| format!("opening log file '{path}'"))?;

            let _ = builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
        Ok(())
    }
}
