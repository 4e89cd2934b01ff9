//! Dataset and code score: whether the training data and example code are available and documented.

use super::MetricValue;
use crate::Result;
use crate::context::{Context, keys};

/// Shortest final path segment that is distinctive enough to search for.
const MIN_SEGMENT_LEN: usize = 3;

pub fn score(context: &Context) -> Result<MetricValue> {
    let readme = context.text(keys::README)?.unwrap_or_default().to_lowercase();
    let dataset_link = context.text(keys::DATASET_LINK)?;
    let code_link = context.text(keys::CODE_LINK)?;
    let example_code = context.flag(keys::EXAMPLE_CODE_PRESENT)?.unwrap_or(false);

    let dataset = dataset_link.is_some_and(|link| is_referenced(link, &readme));
    let code = code_link.is_some_and(|link| is_referenced(link, &readme)) || (example_code && readme.contains("```"));

    let score = match (dataset, code) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.5,
        (false, false) => 0.0,
    };

    Ok(MetricValue::Score(score))
}

/// Whether a lowercased README mentions a link, either verbatim or by its final path segment.
fn is_referenced(link: &str, readme: &str) -> bool {
    let link = link.trim().trim_end_matches('/').to_lowercase();
    if link.is_empty() || readme.is_empty() {
        return false;
    }

    if readme.contains(&link) {
        return true;
    }

    link.rsplit('/')
        .next()
        .map(|segment| segment.trim_end_matches(".git"))
        .is_some_and(|segment| segment.len() >= MIN_SEGMENT_LEN && readme.contains(segment))
}
