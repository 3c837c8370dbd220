//! Read-only boundary to a host B-Rep, plus a deterministic in-memory
//! implementation for tests and fixtures.
//!
//! The `ShapeAdapter` trait is the only thing downstream crates know about
//! a modeling kernel: entity counts, incidence, boundary profiles, and the
//! local geometry needed to classify dihedral transitions. `SyntheticShape`
//! implements it over plain tables so everything stays reproducible without
//! a kernel process.

pub mod adapter;
pub mod geometry;
pub mod primitives;
pub mod synthetic;

pub use adapter::ShapeAdapter;
pub use geometry::*;
pub use synthetic::{CoEdge, ShapeError, SyntheticShape};
