#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for trustscore
//!
//! This library consolidates all functionality for the trustscore tool, which rates
//! machine-learning models on a set of trust metrics and combines them into a
//! weighted net score.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`context`]: Artifact classification and per-model metadata
//! - [`metrics`]: Metric definitions, scorers and concurrent evaluation
//! - [`scoring`]: Weights, aggregation and output records
//! - [`reports`]: Report generation in multiple formats

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod context;
#[cfg(not(any(debug_assertions, test)))]
mod context;

#[cfg(any(debug_assertions, test))]
pub mod metrics;
#[cfg(not(any(debug_assertions, test)))]
mod metrics;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

#[cfg(any(debug_assertions, test))]
pub mod scoring;
#[cfg(not(any(debug_assertions, test)))]
mod scoring;

pub use crate::commands::{Host, run};
