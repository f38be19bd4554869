//! Common test utilities for gitship CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory with stub `git`/`pip` on `PATH`
//! - Assertion macros: `assert_output_contains!`, `assert_invoked!`
//! - Fixtures: stub scripts and project file contents

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
