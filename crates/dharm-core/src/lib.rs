//! dharm-core — date harmonizer core library.
//!
//! Turns free-text date cells (`1990`, `1990-Feb`, `(1990/1991)-Summer`, …)
//! into a canonical `YYYY-MM-DD` start/end pair.
//!
//! # Architecture
//!
//! ```text
//! vocabulary ──► patterns ──► normalizer
//!                               │
//!                  types ◄──────┘
//! ```
//!
//! The pattern table is compiled once and shared read-only; every conversion
//! is a pure function of the input string and the [`Fillers`] it is given.

pub mod config;
pub mod error;
pub mod normalizer;
pub mod patterns;
pub mod types;
pub mod vocabulary;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use normalizer::{classify, convert, normalize, try_convert, Conversion};
pub use patterns::{patterns, PatternId, PatternRule};
pub use types::{DateSpan, Fillers, ALERT};
