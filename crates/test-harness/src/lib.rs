//! Integration harness for the recognition pipeline.
//!
//! Fixtures with known topology and classifications, plus assertion
//! helpers that report expected vs actual on failure. The scenario tests
//! under `tests/` drive the whole chain: synthetic shape, adjacency graph,
//! pattern search.
//!
//! # Key Components
//!
//! - [`fixtures`] — slotted plates, pattern graphs, primitive re-exports
//! - [`assertions`] — `Result`-returning checks with diagnostics

pub mod assertions;
pub mod fixtures;

pub use assertions::HarnessError;
