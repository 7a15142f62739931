//! Shared utilities for script-index integration tests
//!
//! Tests drive the real binary against temporary script directories.

pub mod assertions;
pub mod fixtures;
