//! License: clarity and permissiveness of the model's license.

use super::MetricValue;
use crate::Result;
use crate::context::{Context, keys};
use regex::Regex;
use std::sync::LazyLock;

/// Permissive license identifiers, matched as whole tokens.
static PERMISSIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:mit|apache|bsd|lgpl|isc|mpl|unlicense|cc0|cc-by|zlib|bsl-1\.0|openrail)\b").expect("invalid regex")
});

/// Creative Commons variants that forbid commercial use or derivatives.
static RESTRICTED_CC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bcc-by(?:-[a-z]+)*-n[cd]\b").expect("invalid regex"));

const PERMISSIVE_SCORE: f64 = 1.0;
const MENTIONED_SCORE: f64 = 0.5;
const RESTRICTIVE_SCORE: f64 = 0.2;

pub fn score(context: &Context) -> Result<MetricValue> {
    let readme = context.text(keys::README)?;
    let declared = context.text(keys::LICENSE)?.map(str::trim).filter(|license| !license.is_empty());

    let score = match declared {
        Some(license) if is_permissive(license) => PERMISSIVE_SCORE,
        Some(_) => RESTRICTIVE_SCORE,
        None if readme.is_some_and(mentions_license) => MENTIONED_SCORE,
        None => 0.0,
    };

    Ok(MetricValue::Score(score))
}

fn is_permissive(license: &str) -> bool {
    PERMISSIVE_REGEX.is_match(license) && !RESTRICTED_CC_REGEX.is_match(license)
}

fn mentions_license(readme: &str) -> bool {
    let lower = readme.to_lowercase();
    lower.contains("license") || lower.contains("licence")
}
