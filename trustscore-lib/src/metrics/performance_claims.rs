//! Performance claims: whether the model card backs its claims with benchmark numbers.

use super::MetricValue;
use crate::Result;
use crate::context::{Context, keys};
use regex::Regex;
use std::sync::LazyLock;

static BENCHMARK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:benchmarks?|leaderboards?|sota)\b").expect("invalid regex"));

static METRIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:accuracy|f1|bleu|rouge(?:-[l\d]+)?|perplexity|mmlu|hellaswag|truthfulqa|precision|recall|auc)\b")
        .expect("invalid regex")
});

// A percentage such as "92%" or "92.3 %", or a decimal number such as "0.87".
static NUMERIC_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{1,3}(?:\.\d+)?\s*%|\b\d+\.\d+\b").expect("invalid regex"));

pub fn score(context: &Context) -> Result<MetricValue> {
    let Some(readme) = context.text(keys::README)? else {
        return Ok(MetricValue::Score(0.0));
    };

    let has_benchmark = BENCHMARK_REGEX.is_match(readme);
    let has_metric = METRIC_REGEX.is_match(readme);
    let has_number = NUMERIC_REGEX.is_match(readme);

    let score = match (has_benchmark, has_metric, has_number) {
        (true, true, true) => 1.0,
        (true, true, false) => 0.5,
        (false, true, _) => 0.25,
        _ => 0.0,
    };

    Ok(MetricValue::Score(score))
}
