//! Core domain types for Mason.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the build tool.

mod feature;

pub use feature::{Feature, UnknownFeatureError};
