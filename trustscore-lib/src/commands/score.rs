use super::Host;
use super::common::ColorMode;
use super::config::Config;
use crate::Result;
use crate::context::{ArtifactRef, ContextBuilder, ContextStore};
use crate::reports::{generate_console, generate_csv, generate_ndjson};
use crate::scoring::{ScoreRecord, ScoringSession};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ohno::{IntoAppError, app_err};
use std::fs;
use std::io::Write;

const LOG_TARGET: &str = "     score";

#[derive(Parser, Debug)]
pub struct ScoreArgs {
    /// File listing artifact URLs, one model per line as `code,dataset,model` (blank fields allowed)
    #[arg(value_name = "URL_FILE")]
    pub url_file: Utf8PathBuf,

    /// JSON file holding pre-fetched metadata keyed by artifact URL
    #[arg(long, value_name = "PATH")]
    pub context: Option<Utf8PathBuf>,

    /// Path to configuration file (default is `trustscore.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Write NDJSON records to a file instead of to standard output
    #[arg(long, short = 'o', value_name = "PATH", help_heading = "Report Output")]
    pub output: Option<Utf8PathBuf>,

    /// Also print a human-readable report to standard output
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,

    /// Write a CSV report to a file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub csv: Option<Utf8PathBuf>,
}

/// Score every model listed in a URL file and emit the reports requested
///
/// Dataset and code URLs are linked to the models that follow them. Models whose
/// metadata cannot be used are reported on standard error and skipped, and the
/// command then fails after emitting records for the rest.
pub async fn process_score<H: Host>(host: &mut H, args: &ScoreArgs) -> Result<()> {
    let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;

    let store = match &args.context {
        Some(path) => ContextStore::load(path)?,
        None => ContextStore::new(),
    };

    let text = fs::read_to_string(&args.url_file).into_app_err_with(|| format!("reading URL file '{}'", args.url_file))?;
    let artifacts = parse_url_list(&text);
    log::info!(target: LOG_TARGET, "Found {} artifact URL(s) in '{}'", artifacts.len(), args.url_file);

    let mut builder = ContextBuilder::new(&store);
    let mut pending = Vec::new();
    let mut failures = 0_usize;

    for artifact in artifacts {
        builder.observe(&artifact);
        if !artifact.is_model() {
            log::debug!(target: LOG_TARGET, "Skipping non-model artifact '{artifact}' ({})", artifact.category());
            continue;
        }

        match builder.build(&artifact) {
            Ok(context) => pending.push((artifact, context)),
            Err(e) => {
                let _ = writeln!(host.error(), "Could not score '{artifact}': {e}");
                failures += 1;
            }
        }
    }

    let session = ScoringSession::new(config.weights, config.max_workers);
    let records = session.score_all(pending).await;

    write_reports(host, args, &records)?;

    if failures > 0 {
        return Err(app_err!("could not score {failures} artifact(s)"));
    }

    Ok(())
}

fn write_reports<H: Host>(host: &mut H, args: &ScoreArgs, records: &[ScoreRecord]) -> Result<()> {
    let mut ndjson = String::new();
    generate_ndjson(records, &mut ndjson)?;

    if let Some(path) = &args.output {
        fs::write(path, &ndjson).into_app_err_with(|| format!("writing NDJSON output to '{path}'"))?;
    } else {
        host.output().write_all(ndjson.as_bytes())?;
    }

    if args.console && !records.is_empty() {
        let mut console_output = String::new();
        generate_console(records, args.color.use_colors(), &mut console_output)?;
        host.output().write_all(console_output.as_bytes())?;
    }

    if let Some(path) = &args.csv {
        let mut csv_output = String::new();
        generate_csv(records, &mut csv_output)?;
        fs::write(path, csv_output).into_app_err_with(|| format!("writing CSV report to '{path}'"))?;
    }

    Ok(())
}

/// Parse a URL list: one or more comma-separated URLs per line, blank entries ignored.
fn parse_url_list(text: &str) -> Vec<ArtifactRef> {
    text.lines()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(ArtifactRef::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use crate::context::ArtifactCategory;

    #[test]
    fn test_parse_url_list() {
        let text = "\
https://github.com/google-research/bert, https://huggingface.co/datasets/bookcorpus/bookcorpus, https://huggingface.co/google-bert/bert-base-uncased
,,https://huggingface.co/openai/whisper-tiny/tree/main

https://huggingface.co/distilbert-base-uncased-distilled-squad
";
        let artifacts = parse_url_list(text);
        let categories: Vec<_> = artifacts.iter().map(ArtifactRef::category).collect();
        assert_eq!(
            categories,
            [
                ArtifactCategory::Code,
                ArtifactCategory::Dataset,
                ArtifactCategory::Model,
                ArtifactCategory::Model,
                ArtifactCategory::Model,
            ]
        );
        assert_eq!(artifacts[3].name(), "openai/whisper-tiny");
    }

    #[tokio::test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    async fn test_process_score_links_and_emits_records() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();

        let url_file = dir.join("urls.txt");
        fs::write(
            &url_file,
            "https://github.com/google-research/bert,https://huggingface.co/datasets/bookcorpus/bookcorpus,https://huggingface.co/google-bert/bert-base-uncased\n",
        )
        .unwrap();

        let context_file = dir.join("context.json");
        fs::write(
            &context_file,
            r#"{"https://huggingface.co/google-bert/bert-base-uncased": {"hf_readme": "Trained on BookCorpus, code in google-research/bert.", "license": "apache-2.0"}}"#,
        )
        .unwrap();

        let args = ScoreArgs {
            url_file,
            context: Some(context_file),
            config: None,
            color: ColorMode::Never,
            output: None,
            console: false,
            csv: None,
        };

        let mut host = TestHost::new();
        process_score(&mut host, &args).await.unwrap();

        let output = host.output_str();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 1);

        let record: ScoreRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(record.name, "google-bert/bert-base-uncased");
        assert!((record.license - 1.0).abs() < f64::EPSILON);
        assert!((record.dataset_and_code_score - 1.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_process_score_missing_url_file() {
        let args = ScoreArgs {
            url_file: Utf8PathBuf::from("/nonexistent/urls.txt"),
            context: None,
            config: None,
            color: ColorMode::Never,
            output: None,
            console: false,
            csv: None,
        };

        let mut host = TestHost::new();
        let err = process_score(&mut host, &args).await.unwrap_err();
        assert!(err.to_string().contains("reading URL file"), "{err}");
    }
}
