// crates/pickcountry-core/src/common.rs
use crate::error::{PickError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized (trimmed, upper-case) country code such as `US` or `GB`.
///
/// Never empty: construction goes through [`CountryCode::parse`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    /// Normalizes `raw` into a code. `alias` is only used for the error.
    pub fn parse(raw: &str, alias: &str) -> Result<Self> {
        let code = raw.trim();
        if code.is_empty() {
            return Err(PickError::EmptyCode {
                alias: alias.to_string(),
            });
        }
        Ok(Self(code.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical country record. One per code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub code: CountryCode,
}

impl Country {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &CountryCode {
        &self.code
    }
}

/// One alias -> code binding, as listed by [`Directory::entries`].
///
/// [`Directory::entries`]: crate::Directory::entries
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NameEntry {
    pub name: String,
    pub code: CountryCode,
}

/// Simple aggregate statistics for a built directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryStats {
    pub countries: usize,
    pub aliases: usize,
}
