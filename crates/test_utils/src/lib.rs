//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! crop insurance pool test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common values
//! - `builders`: Builder for a pool with roles and capital already in place
//! - `assertions`: Custom assertion helpers for pool results
//! - `generators`: Property-based test data generators
//! - `logging`: One-time tracing subscriber setup

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;
pub mod logging;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
pub use logging::init_test_tracing;
