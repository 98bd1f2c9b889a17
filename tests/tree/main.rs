//! Integration tests for the gale_tree crate.
//!
//! Tests for the command tree layer:
//! - Priority resolution between competing strategies
//! - Registries and registration error collection
//! - Builder construction
//! - Node matching

mod node_tests;
mod priority_tests;
