//! Integration tests for the gale_engine crate.
//!
//! Tests for the dispatch layer:
//! - Backtracking descent and branch selection
//! - Execute-phase error surfacing and normalization
//! - Context bindings
//! - Completion suggestions

mod common;
mod dispatch_tests;
mod execute_tests;
mod suggest_tests;
