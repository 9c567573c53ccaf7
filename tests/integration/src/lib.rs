//! Integration test utilities for the Wayfarer API
//!
//! Spawns the real router on an ephemeral port against a throwaway SQLite file.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
