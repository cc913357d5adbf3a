// crates/pickcountry-core/src/directory.rs

//! # Country Directory
//!
//! Immutable alias -> code and code -> canonical country lookups, built
//! once from the two raw tables. Construction is the only fallible step of
//! the picker: an alias bound to two different codes aborts the build.

use crate::common::{Country, CountryCode, DirectoryStats, NameEntry};
use crate::error::{PickError, Result};
use crate::raw::{CodeAliasTable, GroupedTable};
use crate::text::{cmp_folded, fold_key};
use crate::traits::NameMatch;
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Directory {
    /// Every alias, sorted with [`cmp_folded`].
    entries: Vec<NameEntry>,
    /// Exact alias string -> code.
    names: HashMap<String, CountryCode>,
    countries: BTreeMap<CountryCode, Country>,
}

impl Directory {
    /// Builds the directory from the primary (code -> aliases) and
    /// secondary (group -> `{n, c}` rows) tables.
    ///
    /// The primary table is consumed first and fixes the canonical name of
    /// each code (first alias of its list). The secondary table then adds
    /// codes not seen yet and any extra aliases.
    ///
    /// # Errors
    ///
    /// [`PickError::AliasCollision`] if an alias is requested for two
    /// different codes, [`PickError::EmptyCode`] for a blank code. No
    /// partial directory is returned.
    pub fn build(codes: &CodeAliasTable, alpha: &GroupedTable) -> Result<Self> {
        let mut names: HashMap<String, CountryCode> = HashMap::new();
        let mut countries: BTreeMap<CountryCode, Country> = BTreeMap::new();

        // 1. Primary source for codes and aliases
        for (raw_code, aliases) in codes {
            let Some(canonical) = aliases.iter().find(|a| !a.trim().is_empty()) else {
                continue;
            };
            let code = CountryCode::parse(raw_code, canonical)?;

            countries.entry(code.clone()).or_insert_with(|| Country {
                name: canonical.clone(),
                code: code.clone(),
            });

            for alias in aliases {
                add_name_entry(&mut names, alias, &code)?;
            }
        }

        // 2. Cross-reference: pick up codes and names the primary table lacks
        for rows in alpha.values() {
            for row in rows {
                if row.name.trim().is_empty() {
                    warn!(code = %row.code, "skipping blank name in grouped table");
                    continue;
                }
                let code = CountryCode::parse(&row.code, &row.name)?;

                countries.entry(code.clone()).or_insert_with(|| Country {
                    name: row.name.clone(),
                    code: code.clone(),
                });

                add_name_entry(&mut names, &row.name, &code)?;
            }
        }

        let mut entries: Vec<NameEntry> = names
            .iter()
            .map(|(name, code)| NameEntry {
                name: name.clone(),
                code: code.clone(),
            })
            .collect();
        entries.sort_by(|a, b| cmp_folded(&a.name, &b.name));

        Ok(Self {
            entries,
            names,
            countries,
        })
    }

    /// All aliases in display order (case-insensitive ascending).
    pub fn entries(&self) -> &[NameEntry] {
        &self.entries
    }

    /// Aliases whose folded form starts with the folded `filter`, in
    /// display order.
    ///
    /// Entries are sorted on their folded form, so the matches form one
    /// contiguous run.
    pub fn matches<'a>(&'a self, filter: &str) -> &'a [NameEntry] {
        let folded = fold_key(filter);
        let start = self
            .entries
            .partition_point(|e| fold_key(&e.name) < folded);
        let len = self.entries[start..]
            .iter()
            .take_while(|e| fold_key(&e.name).starts_with(&folded))
            .count();
        &self.entries[start..start + len]
    }

    /// Resolves an alias to its code: exact string first, then a
    /// case-insensitive match.
    pub fn resolve(&self, alias: &str) -> Option<&CountryCode> {
        self.names.get(alias).or_else(|| {
            self.entries
                .iter()
                .find(|e| e.is_named(alias))
                .map(|e| &e.code)
        })
    }

    /// Canonical country for a code, case-insensitive (`"us"` works).
    pub fn country(&self, code: &str) -> Option<&Country> {
        let code = CountryCode::parse(code, "").ok()?;
        self.countries.get(&code)
    }

    pub fn stats(&self) -> DirectoryStats {
        DirectoryStats {
            countries: self.countries.len(),
            aliases: self.entries.len(),
        }
    }
}

/// Binds `name` to `code`. Re-binding the same pair is a no-op; binding it
/// to a different code is an integrity error.
fn add_name_entry(
    names: &mut HashMap<String, CountryCode>,
    name: &str,
    code: &CountryCode,
) -> Result<()> {
    if name.trim().is_empty() {
        warn!(%code, "skipping blank alias");
        return Ok(());
    }
    match names.get(name) {
        Some(existing) if existing != code => Err(PickError::AliasCollision {
            alias: name.to_string(),
            existing: existing.clone(),
            requested: code.clone(),
        }),
        Some(_) => Ok(()),
        None => {
            names.insert(name.to_string(), code.clone());
            Ok(())
        }
    }
}
