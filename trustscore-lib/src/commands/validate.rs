use super::Host;
use super::config::Config;
use crate::Result;
use crate::metrics::default_results;
use crate::scoring::{NetScore, aggregate};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file (default is `trustscore.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

/// Load a configuration and aggregate the metric floors with its weights
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded, parsed, or carries invalid weights
fn validate_config_inner(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<NetScore> {
    let config = Config::load(base_dir, config_path)?;
    Ok(aggregate(&config.weights, &default_results().collect()))
}

pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    let config_path = args.config.as_ref();

    match validate_config_inner(Utf8Path::new("."), config_path) {
        Ok(baseline) => {
            let _ = writeln!(host.output(), "Configuration file is valid");
            if let Some(path) = config_path {
                let _ = writeln!(host.output(), "Config file: {path}");
            } else {
                let _ = writeln!(host.output(), "Using default configuration (no config file found)");
            }
            let _ = writeln!(host.output(), "Net score with no metadata: {:.3}", baseline.score);
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Configuration validation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}
