//! Dataset quality, approximated by how widely the associated dataset is used.

use super::MetricValue;
use crate::Result;
use crate::context::{Context, keys};

const BASELINE: f64 = 0.2;

/// Downloads are scored logarithmically; roughly 22,000 downloads reach the maximum.
const LOG_SCALE: f64 = 10.0;

pub fn score(context: &Context) -> Result<MetricValue> {
    let downloads = context.number(keys::DATASET_DOWNLOADS)?.unwrap_or(0.0);

    let score = if downloads <= 0.0 {
        BASELINE
    } else {
        (downloads.ln_1p() / LOG_SCALE).clamp(BASELINE, 1.0)
    };

    Ok(MetricValue::Score(score))
}
