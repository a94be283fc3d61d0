//! Error type for dharm-core.

/// Errors surfaced by the fallible entry points of this crate.
///
/// [`convert`](crate::convert) never fails; it reports unrecognised input
/// through the [`ALERT`](crate::ALERT) sentinel. [`try_convert`](crate::try_convert)
/// turns that sentinel into [`Error::Unrecognized`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unrecognised date format: {input:?}")]
    Unrecognized { input: String },

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
