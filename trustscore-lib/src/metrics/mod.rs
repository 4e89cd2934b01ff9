//! Scoring heuristics evaluated against artifact metadata
//!
//! Each metric is a pure function from a [`Context`](crate::context::Context) to a
//! bounded [`MetricValue`]. Most metrics produce a single score in [0, 1]; the size
//! metric produces one score per [`HardwareTier`].
//!
//! # Implementation Model
//!
//! Metric definitions are statically registered in `metric_def.rs`. Each definition
//! pairs a [`MetricId`] with a scorer function and a floor, the value reported when
//! the scorer fails. Scorers are free to return errors on malformed input; the
//! [`evaluate`] wrapper times the call, contains errors and panics, and clamps the
//! result, so callers always receive a usable [`MetricResult`].
//!
//! The [`MetricRegistry`] runs every registered metric concurrently on the blocking
//! thread pool and collects the results, in registration order, into [`MetricResults`].

mod bus_factor;
mod code_quality;
mod dataset_and_code_score;
mod dataset_quality;
mod hardware_tier;
mod license;
mod metric;
mod metric_def;
mod metric_id;
mod metric_value;
mod performance_claims;
mod ramp_up_time;
mod registry;
mod size_score;

pub use hardware_tier::{HardwareTier, SizeScores};
pub use metric::{MetricResult, default_results, elapsed_ms, evaluate};
pub use metric_id::MetricId;
pub use metric_value::MetricValue;
pub use registry::{MetricRegistry, MetricResults};

#[cfg(any(debug_assertions, test))]
pub use metric_def::MetricDef;
