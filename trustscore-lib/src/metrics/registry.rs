use super::MetricId;
use super::metric::{MetricResult, evaluate};
use super::metric_def::{METRIC_DEFINITIONS, MetricDef};
use crate::context::Context;
use futures_util::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::spawn_blocking;

const LOG_TARGET: &str = "  registry";

/// The fixed, ordered set of metrics evaluated for every artifact.
#[derive(Debug, Clone, Copy)]
pub struct MetricRegistry {
    defs: &'static [MetricDef],
}

impl Default for MetricRegistry {
    fn default() -> Self {
        Self { defs: METRIC_DEFINITIONS }
    }
}

impl MetricRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) const fn with_definitions(defs: &'static [MetricDef]) -> Self {
        Self { defs }
    }

    pub fn definitions(&self) -> impl Iterator<Item = &'static MetricDef> {
        self.defs.iter()
    }

    /// Evaluate every metric against a context.
    ///
    /// Metrics run on the blocking thread pool, at most `max_workers` at a time, and
    /// the call returns once all of them have finished. A task that fails to complete
    /// is replaced by its metric's floor.
    pub async fn evaluate(&self, context: Arc<Context>, max_workers: usize) -> MetricResults {
        let semaphore = Arc::new(Semaphore::new(max_workers.max(1)));
        let mut tasks = Vec::with_capacity(self.defs.len());

        for def in self.defs {
            let permit = Arc::clone(&semaphore).acquire_owned().await.ok();
            let context = Arc::clone(&context);

            tasks.push(spawn_blocking(move || {
                let _permit = permit;
                evaluate(def, &context)
            }));
        }

        let results = join_all(tasks).await;

        self.defs
            .iter()
            .zip(results)
            .map(|(def, result)| {
                result.unwrap_or_else(|e| {
                    log::warn!(target: LOG_TARGET, "Evaluation task for metric '{}' did not complete, using its floor: {e}", def.id);
                    MetricResult::degraded(def, 0)
                })
            })
            .collect()
    }
}

/// Metric results in registry order.
#[derive(Debug, Clone, Default)]
pub struct MetricResults {
    results: Vec<MetricResult>,
}

impl MetricResults {
    #[must_use]
    pub fn get(&self, id: MetricId) -> Option<&MetricResult> {
        self.results.iter().find(|result| result.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricResult> {
        self.results.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of metrics that fell back to their floor.
    #[must_use]
    pub fn degraded_count(&self) -> usize {
        self.results.iter().filter(|result| result.degraded).count()
    }
}

impl FromIterator<MetricResult> for MetricResults {
    fn from_iter<I: IntoIterator<Item = MetricResult>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MetricResults {
    type Item = &'a MetricResult;
    type IntoIter = core::slice::Iter<'a, MetricResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::keys;
    use crate::metrics::{MetricValue, SizeScores};
    use strum::IntoEnumIterator;

    fn rich_context() -> Context {
        let mut context = Context::new();
        let _ = context.insert(keys::README, "## Usage\n```python\nimport torch\n```\nbenchmark accuracy 91.2%");
        let _ = context.insert(keys::LICENSE, "mit");
        let _ = context.insert(keys::GIT_CONTRIBUTORS, 12_i64);
        let _ = context.insert(keys::WEIGHTS_TOTAL_BYTES, 10_i64 * 1024 * 1024);
        let _ = context.insert(keys::HAS_TESTS, true);
        context
    }

    #[tokio::test]
    async fn test_evaluate_returns_all_metrics_in_order() {
        let results = MetricRegistry::new().evaluate(Arc::new(rich_context()), 4).await;

        assert_eq!(results.len(), 8);
        let ids: Vec<_> = results.iter().map(MetricResult::id).collect();
        assert_eq!(ids, MetricId::iter().collect::<Vec<_>>());
        assert_eq!(results.degraded_count(), 0);
    }

    #[tokio::test]
    async fn test_evaluate_values() {
        let results = MetricRegistry::new().evaluate(Arc::new(rich_context()), 1).await;

        assert_eq!(results.get(MetricId::License).unwrap().value, MetricValue::Score(1.0));
        assert_eq!(results.get(MetricId::BusFactor).unwrap().value, MetricValue::Score(1.0));
        assert_eq!(results.get(MetricId::PerformanceClaims).unwrap().value, MetricValue::Score(1.0));
        assert_eq!(
            results.get(MetricId::SizeScore).unwrap().value,
            MetricValue::Tiers(SizeScores::from_fn(|_| 1.0))
        );
    }

    #[tokio::test]
    async fn test_evaluate_is_idempotent() {
        let context = Arc::new(rich_context());
        let registry = MetricRegistry::new();
        let first = registry.evaluate(Arc::clone(&context), 2).await;
        let second = registry.evaluate(context, 2).await;

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.value, b.value, "metric '{}'", a.name());
        }
    }

    #[tokio::test]
    async fn test_zero_workers_still_runs() {
        let results = MetricRegistry::new().evaluate(Arc::new(Context::new()), 0).await;
        assert_eq!(results.len(), 8);
    }

    #[tokio::test]
    async fn test_panicking_metric_is_isolated() {
        static DEFS: &[MetricDef] = &[
            MetricDef {
                id: MetricId::RampUpTime,
                description: "panics",
                scorer: |_| -> crate::Result<MetricValue> { panic!("boom") },
                floor: || MetricValue::Score(0.0),
            },
            MetricDef {
                id: MetricId::BusFactor,
                description: "constant",
                scorer: |_| Ok(MetricValue::Score(0.7)),
                floor: || MetricValue::Score(0.1),
            },
        ];

        let results = MetricRegistry::with_definitions(DEFS).evaluate(Arc::new(Context::new()), 2).await;
        assert!(results.get(MetricId::RampUpTime).unwrap().degraded);
        assert_eq!(results.get(MetricId::BusFactor).unwrap().value, MetricValue::Score(0.7));
        assert_eq!(results.degraded_count(), 1);
    }
}
