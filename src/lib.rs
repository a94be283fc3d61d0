//! dharm — date harmonizer
//!
//! Normalises free-text date cells (`1990-Feb`, `(1990/1991)-Summer`, …) into
//! canonical `YYYY-MM-DD` start/end pairs. The conversion engine lives in
//! [`dharm_core`]; this crate adds the rendering used by the `dharm` binary
//! so integration tests can drive it without spawning a process.
//!
//! # Architecture
//!
//! ```text
//! args / stdin ──► dharm_core::normalize ──► output (TSV | JSON lines)
//! ```

pub mod output;

pub use dharm_core::{
    classify, convert, normalize, try_convert, Config, Conversion, DateSpan, Fillers,
    OutputFormat, PatternId, ALERT,
};
