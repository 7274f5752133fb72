//! Core domain logic for Mason.
//!
//! This crate holds the feature-preview registry and the run-configuration
//! collaborator it reads at construction. No IO happens here: the invocation
//! layer owns argument parsing and hands in a populated [`RunOptions`].

mod previews;
mod run_options;

pub use previews::FeaturePreviews;
pub use run_options::RunOptions;
