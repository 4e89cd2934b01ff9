//! Command dispatch logic for trustscore

use super::common::LoggingArgs;
use super::{InitArgs, ScoreArgs, ValidateArgs, init_config, process_score, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "trustscore", version, author, long_about = None)]
#[command(about = "Score the trustworthiness of machine-learning models")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    logging: LoggingArgs,

    #[command(subcommand)]
    command: TrustscoreSubcommand,
}

#[derive(Subcommand, Debug)]
enum TrustscoreSubcommand {
    /// Score the models listed in a URL file
    Score(Box<ScoreArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if logging cannot be set up or if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);
    cli.logging.init_logging()?;

    match &cli.command {
        TrustscoreSubcommand::Score(score_args) => process_score(host, score_args).await,
        TrustscoreSubcommand::Init(init_args) => init_config(host, init_args),
        TrustscoreSubcommand::Validate(validate_args) => validate_config(host, validate_args),
    }
}
