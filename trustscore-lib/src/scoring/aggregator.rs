use super::Weights;
use crate::Result;
use crate::metrics::{MetricId, MetricResults, MetricValue, SizeScores, elapsed_ms};
use ohno::bail;
use std::time::Instant;

const LOG_TARGET: &str = "aggregator";

/// The combined score of an artifact and the time taken to compute it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetScore {
    pub score: f64,
    pub latency_ms: u64,
}

/// Combine metric results into a net score in [0, 1].
///
/// A missing size result counts as fully deployable and any other missing result counts
/// as zero. A result of the wrong shape, or a sum that is not finite, makes the net score zero.
pub fn aggregate(weights: &Weights, results: &MetricResults) -> NetScore {
    let start = Instant::now();

    let score = match weighted_sum(weights, results) {
        Ok(sum) => sum.clamp(0.0, 1.0),
        Err(e) => {
            log::warn!(target: LOG_TARGET, "Could not aggregate metric results, using a net score of 0: {e}");
            0.0
        }
    };

    NetScore {
        score,
        latency_ms: elapsed_ms(start),
    }
}

fn weighted_sum(weights: &Weights, results: &MetricResults) -> Result<f64> {
    let mut sum = 0.0;

    for (id, weight) in weights.iter() {
        let contribution = match results.get(id) {
            Some(result) => contribution(id, &result.value)?,
            None if id == MetricId::SizeScore => SizeScores::FULL.mean(),
            None => 0.0,
        };

        sum += weight * contribution;
    }

    if !sum.is_finite() {
        bail!("weighted sum is not finite");
    }

    Ok(sum)
}

fn contribution(id: MetricId, value: &MetricValue) -> Result<f64> {
    match (id, value) {
        (MetricId::SizeScore, MetricValue::Tiers(tiers)) => Ok(tiers.mean()),
        (MetricId::SizeScore, MetricValue::Score(_)) => bail!("metric '{id}' must produce per-tier scores"),
        (_, MetricValue::Score(score)) => Ok(*score),
        (_, MetricValue::Tiers(_)) => bail!("metric '{id}' must produce a single score"),
    }
}
