//! Shared test fixtures for spacing crates.
//!
//! This crate provides data and pure helpers for testing. It depends only
//! on `spacing-core` so every other crate can use it as a dev-dependency.
//!
//! - [`samples`] - Reference rows with their expected results
//! - [`rows`] - Row builders
//! - [`strategies`] - `proptest` strategies for arbitrary rows
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! spacing-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use spacing_test::{row, SAMPLE_ROWS};
//! use spacing_test::strategies::arb_row;
//! ```

pub mod rows;
pub mod samples;
pub mod strategies;

pub use rows::{row, spaced_row};
pub use samples::{SampleRow, SAMPLE_ROWS};
