// crates/pickcountry-core/src/error.rs
use crate::common::CountryCode;
use thiserror::Error;

/// Errors raised while loading data tables and building the [`Directory`].
///
/// Once a [`Directory`] exists nothing in the picker can fail; key handling
/// and projection are total.
///
/// [`Directory`]: crate::Directory
#[derive(Debug, Error)]
pub enum PickError {
    /// The same alias string was requested for two different codes.
    #[error("name collision: '{alias}' is already mapped to {existing}, cannot map to {requested}")]
    AliasCollision {
        alias: String,
        existing: CountryCode,
        requested: CountryCode,
    },

    /// A table row carried a code that is empty after trimming.
    #[error("empty country code for alias '{alias}'")]
    EmptyCode { alias: String },

    #[error("{0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PickError {
    /// `true` for the integrity failures of directory construction, as
    /// opposed to plain I/O or parse failures.
    pub fn is_integrity_error(&self) -> bool {
        matches!(self, Self::AliasCollision { .. } | Self::EmptyCode { .. })
    }
}

pub type Result<T> = std::result::Result<T, PickError>;
