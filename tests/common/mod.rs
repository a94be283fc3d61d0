//! Shared test utilities for dharm integration harnesses.
//!
//! Import everything you need via `#[macro_use] mod common; use common::*;`
//! at the top of each harness file.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

pub use fixtures::*;
