//! CLI integration tests for bgraph.

mod common;
mod targets_tests;
mod top_tests;
