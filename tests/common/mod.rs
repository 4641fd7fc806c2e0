//! Common test utilities for Kiln integration and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project and home directories plus CLI helpers
//! - Assertion macros: `assert_artifact!`, `assert_no_artifact!`

#![allow(dead_code)]

pub mod assertions;
pub mod env;

pub use assertions::*;
pub use env::*;
