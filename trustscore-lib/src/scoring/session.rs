use super::{ScoreRecord, Weights, aggregate};
use crate::context::{ArtifactRef, Context};
use crate::metrics::MetricRegistry;
use core::num::NonZero;
use futures_util::future::join_all;
use std::sync::Arc;

const LOG_TARGET: &str = "   session";

/// Scores artifacts end to end: metrics, aggregation, and record assembly.
///
/// Scoring never fails. Metric failures are replaced by floors and aggregation
/// failures by a net score of zero.
#[derive(Debug, Clone)]
pub struct ScoringSession {
    registry: MetricRegistry,
    weights: Weights,
    max_workers: usize,
}

impl ScoringSession {
    /// Create a session. A `max_workers` of zero uses the available parallelism.
    #[must_use]
    pub fn new(weights: Weights, max_workers: usize) -> Self {
        let max_workers = if max_workers == 0 {
            std::thread::available_parallelism().map(NonZero::get).unwrap_or(4)
        } else {
            max_workers
        };

        Self {
            registry: MetricRegistry::new(),
            weights,
            max_workers,
        }
    }

    #[must_use]
    pub const fn weights(&self) -> &Weights {
        &self.weights
    }

    #[must_use]
    pub const fn max_workers(&self) -> usize {
        self.max_workers
    }

    /// Score a single artifact against its context.
    pub async fn score(&self, artifact: &ArtifactRef, context: Context) -> ScoreRecord {
        log::debug!(target: LOG_TARGET, "Scoring '{}' with {} metadata key(s)", artifact.name(), context.len());

        let results = self.registry.evaluate(Arc::new(context), self.max_workers).await;
        let degraded = results.degraded_count();
        if degraded > 0 {
            log::debug!(target: LOG_TARGET, "{degraded} metric(s) for '{}' fell back to their floor", artifact.name());
        }

        let net = aggregate(&self.weights, &results);
        log::info!(target: LOG_TARGET, "Scored '{}': {:.3}", artifact.name(), net.score);

        ScoreRecord::new(artifact, &results, net)
    }

    /// Score several artifacts concurrently, returning records in input order.
    pub async fn score_all(&self, artifacts: Vec<(ArtifactRef, Context)>) -> Vec<ScoreRecord> {
        join_all(
            artifacts
                .into_iter()
                .map(|(artifact, context)| async move { self.score(&artifact, context).await }),
        )
        .await
    }
}
