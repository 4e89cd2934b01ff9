//! Command-line interface and orchestration for trustscore
//!
//! This module implements the CLI commands and ties the other modules together
//! to score models end to end: argument parsing, configuration management,
//! context assembly, scoring and report generation.
//!
//! ## Commands
//!
//! - **score**: Read a URL file, link dataset and code URLs to the models that
//!   follow them, score every model and emit NDJSON (plus optional console and
//!   CSV reports)
//! - **init**: Generate a default configuration file
//! - **validate**: Check a configuration file and dry-run the aggregator against
//!   the metric floors
//!
//! The `run` function parses command-line arguments using clap, sets up logging
//! and routes to the appropriate command handler.

mod common;
mod config;
mod host;
mod init;
mod run;
mod score;
mod validate;

#[cfg(debug_assertions)]
pub use config::Config;


pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use score::{ScoreArgs, process_score};
pub use validate::{ValidateArgs, validate_config};
