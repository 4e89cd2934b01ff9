//! Artifact identification and per-artifact metadata
//!
//! This module turns raw artifact URLs into typed references and assembles the
//! metadata mapping that metrics are evaluated against.
//!
//! # Implementation Model
//!
//! The core type is [`Context`], a flat mapping from well-known keys (see [`keys`])
//! to loosely typed [`ContextValue`]s. Any key may be absent. Typed accessors on
//! [`Context`] distinguish an absent key (`Ok(None)`) from a value of the wrong
//! type (`Err`), which lets each metric degrade to its floor on malformed input
//! while treating missing input as a normal case.
//!
//! [`ArtifactRef`] classifies a URL as a model, dataset, code repository, or
//! unknown resource and derives a display name from it.
//!
//! Metadata is never fetched here. A [`ContextStore`] holds pre-fetched metadata
//! keyed by URL, and a [`ContextBuilder`] walks an ordered list of artifacts,
//! remembering the most recent dataset and code links so they can be attached
//! to the context of each model that follows them.

mod artifact_ref;
mod context_builder;
mod context_map;
mod context_store;
mod context_value;
pub mod keys;

pub use artifact_ref::{ArtifactCategory, ArtifactRef};
pub use context_map::Context;
pub use context_builder::ContextBuilder;
pub use context_store::ContextStore;
pub use context_value::ContextValue;
