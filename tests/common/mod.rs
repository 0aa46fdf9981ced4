//! Common test utilities for shipsync CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project/home directories plus a private PATH
//! - Fake `rsync`/`ssh` executables that record how they were called

#![allow(dead_code)]

pub mod env;

pub use env::*;
