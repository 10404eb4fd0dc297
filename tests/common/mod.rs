//! Common test utilities for single-role-delete CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with a temp working directory
//! - Fixtures: Reusable users files

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
