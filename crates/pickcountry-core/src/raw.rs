// crates/pickcountry-core/src/raw.rs
//! Raw input tables, exactly as they come from the JSON data files.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Primary table (`country_codes.json`): code -> ordered alias list.
///
/// The first alias of each list is the canonical display name.
///
/// ```json
/// { "US": ["United States", "USA", "America"], "CA": ["Canada"] }
/// ```
pub type CodeAliasTable = BTreeMap<String, Vec<String>>;

/// One row of the secondary table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupedEntry {
    #[serde(rename = "n")]
    pub name: String,
    #[serde(rename = "c")]
    pub code: String,
}

impl GroupedEntry {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// Secondary table (`alpha_countries.json`): grouping label -> rows.
///
/// ```json
/// { "U": [{ "n": "United States", "c": "US" }], "C": [{ "n": "Canada", "c": "CA" }] }
/// ```
pub type GroupedTable = BTreeMap<String, Vec<GroupedEntry>>;
