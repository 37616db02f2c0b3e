//! Service layer for TUI operations.

mod artifacts;

pub use artifacts::{load_artifacts, Artifacts};

#[cfg(test)]
pub use artifacts::test_support;
