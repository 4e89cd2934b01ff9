//! Report generation for scored artifacts
//!
//! This module transforms [`ScoreRecord`](crate::scoring::ScoreRecord)s into output
//! formats for machines and people.
//!
//! # Implementation Model
//!
//! Three report generators are provided, each accessed through a `generate` function
//! writing to any [`core::fmt::Write`]:
//! - **NDJSON**: One compact JSON object per line, in the canonical field order
//! - **Console**: Per-artifact blocks with optional ANSI colors
//! - **CSV**: Spreadsheet-compatible rows with size tiers flattened into columns
//!
//! Score formatting and color banding are shared through the `common` module.

mod common;
mod console;
mod csv;
mod ndjson;

pub use console::generate as generate_console;
pub use csv::generate as generate_csv;
pub use ndjson::generate as generate_ndjson;
