//! Shared utilities for the phone price prediction workspace
//!
//! - Configuration structs and YAML loading (with `!include` merging)
//! - Test fixtures shared by the `pricing` and `phones` test suites

pub mod config;
pub mod yaml_include;

// Test helpers module - available for both development and test builds
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

#[cfg(any(test, feature = "test-helpers"))]
pub use test_helpers::{ArtifactDir, generate_unique_id, write_json_fixture};
