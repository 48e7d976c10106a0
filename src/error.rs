use std::num::ParseIntError;
use thiserror::Error;

/// Errors surfaced by the settings accessor
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The stored polling interval is not a base-10 integer
    #[error("invalid interval value {value:?}: {source}")]
    InvalidInterval {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

pub type Result<T> = std::result::Result<T, SettingsError>;
