use super::metric_def::{METRIC_DEFINITIONS, MetricDef};
use super::{MetricId, MetricValue};
use crate::context::Context;
use core::panic::AssertUnwindSafe;
use std::time::Instant;

const LOG_TARGET: &str = "    metric";

/// The outcome of evaluating one metric against one context.
#[derive(Debug, Clone, Copy)]
pub struct MetricResult {
    pub def: &'static MetricDef,
    pub value: MetricValue,
    pub latency_ms: u64,

    /// Whether the value is the metric's floor, substituted after a failure.
    pub degraded: bool,
}

impl MetricResult {
    #[must_use]
    pub const fn new(def: &'static MetricDef, value: MetricValue, latency_ms: u64) -> Self {
        Self {
            def,
            value,
            latency_ms,
            degraded: false,
        }
    }

    /// The metric's floor, standing in for a failed evaluation.
    #[must_use]
    pub fn degraded(def: &'static MetricDef, latency_ms: u64) -> Self {
        Self {
            def,
            value: (def.floor)(),
            latency_ms,
            degraded: true,
        }
    }

    #[must_use]
    pub const fn id(&self) -> MetricId {
        self.def.id
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.def.id.name()
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.def.description
    }
}

/// Evaluate a metric, timing the scorer and containing any failure.
///
/// Errors, panics and non-finite results all yield the metric's floor; whatever the
/// scorer produces is clamped to [0, 1].
///
/// Scorers report bad input through `Err` and are expected never to panic. Should one
/// panic anyway, the process panic hook still prints its message to standard error
/// before the floor is substituted.
pub fn evaluate(def: &'static MetricDef, context: &Context) -> MetricResult {
    let start = Instant::now();
    let outcome = std::panic::catch_unwind(AssertUnwindSafe(|| (def.scorer)(context)));
    let latency_ms = elapsed_ms(start);

    match outcome {
        Ok(Ok(value)) if value.is_finite() => MetricResult::new(def, value.clamped(), latency_ms),
        Ok(Ok(value)) => {
            log::debug!(target: LOG_TARGET, "Metric '{}' produced a non-finite value {value:?}, using its floor", def.id);
            MetricResult::degraded(def, latency_ms)
        }
        Ok(Err(e)) => {
            log::debug!(target: LOG_TARGET, "Metric '{}' failed, using its floor: {e}", def.id);
            MetricResult::degraded(def, latency_ms)
        }
        Err(_) => {
            log::warn!(target: LOG_TARGET, "Metric '{}' panicked, using its floor", def.id);
            MetricResult::degraded(def, latency_ms)
        }
    }
}

/// Return the floor value of every metric with zero latency
///
/// This is useful for validation where results are needed without any context to
/// evaluate against.
pub fn default_results() -> impl Iterator<Item = MetricResult> {
    METRIC_DEFINITIONS.iter().map(|def| MetricResult::new(def, (def.floor)(), 0))
}

/// Milliseconds since `start`, rounded to the nearest millisecond.
#[must_use]
pub fn elapsed_ms(start: Instant) -> u64 {
    let micros = start.elapsed().as_micros();
    u64::try_from(micros.saturating_add(500) / 1000).unwrap_or(u64::MAX)
}
