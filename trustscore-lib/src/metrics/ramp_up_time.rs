//! Ramp-up time: how quickly a newcomer can get started with the model.

use super::MetricValue;
use crate::Result;
use crate::context::{Context, keys};

const GUIDANCE_KEYWORDS: &[&str] = &["example", "quickstart", "getting started", "usage"];
const CODE_MARKERS: &[&str] = &["```", "import ", "from ", "def ", "class "];

const GUIDANCE_BONUS: f64 = 0.35;
const CODE_BONUS: f64 = 0.15;

pub fn score(context: &Context) -> Result<MetricValue> {
    let Some(readme) = context.text(keys::README)? else {
        return Ok(MetricValue::Score(0.0));
    };

    let lower = readme.to_lowercase();
    let mut score = length_score(readme.split_whitespace().count());

    if GUIDANCE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        score += GUIDANCE_BONUS;
    }

    if CODE_MARKERS.iter().any(|marker| lower.contains(marker)) {
        score += CODE_BONUS;
    }

    Ok(MetricValue::Score(score.clamp(0.0, 1.0)))
}

const fn length_score(words: usize) -> f64 {
    match words {
        150.. => 0.5,
        100..=149 => 0.4,
        50..=99 => 0.3,
        1..=49 => 0.1,
        0 => 0.0,
    }
}
