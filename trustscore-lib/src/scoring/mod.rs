//! Weighted aggregation of metric results into a net trust score
//!
//! This module turns the per-metric results produced by the
//! [`MetricRegistry`](crate::metrics::MetricRegistry) into a single net score and
//! packages everything known about one artifact into a [`ScoreRecord`].
//!
//! # Implementation Model
//!
//! The net score is a weighted sum over all metrics using a [`Weights`] vector whose
//! entries lie in [0, 1] and sum to 1. The size metric contributes the mean of its
//! per-tier scores. The [`aggregate`] function never fails: a result of the wrong
//! shape or a non-finite sum yields a net score of zero, and the time spent
//! aggregating is always reported.
//!
//! A [`ScoringSession`] ties the pieces together for a batch of artifacts. For each
//! artifact it evaluates all metrics concurrently, waits for them to finish,
//! aggregates, and emits a [`ScoreRecord`] whose scores are rounded to three decimals.

mod aggregator;
mod score_record;
mod session;
mod weights;

pub use aggregator::{NetScore, aggregate};
pub use score_record::ScoreRecord;
pub use session::ScoringSession;
pub use weights::Weights;

#[cfg(test)]
pub(crate) use score_record::tests::sample_record;
