// crates/pickcountry-core/src/loader.rs

//! # Data Loader
//!
//! Reads the two JSON tables from disk (optionally gzipped) and hands them
//! to [`Directory::build`].

use crate::directory::Directory;
use crate::error::{PickError, Result};
use crate::raw::{CodeAliasTable, GroupedTable};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the primary (code -> aliases) table.
pub const CODES_FILENAME: &str = "country_codes.json";
/// File name of the secondary (group -> `{n, c}`) table.
pub const ALPHA_FILENAME: &str = "alpha_countries.json";

impl Directory {
    /// Directory holding the bundled data tables.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// Loads the bundled tables from [`Directory::default_data_dir`].
    pub fn load_default() -> Result<Self> {
        let dir = Self::default_data_dir();
        Self::load_from_paths(dir.join(CODES_FILENAME), dir.join(ALPHA_FILENAME))
    }

    /// Loads both tables and builds the directory.
    pub fn load_from_paths(codes: impl AsRef<Path>, alpha: impl AsRef<Path>) -> Result<Self> {
        let codes_path = codes.as_ref();
        let alpha_path = alpha.as_ref();

        let codes: CodeAliasTable = load_json(codes_path)?;
        let alpha: GroupedTable = load_json(alpha_path)?;
        let directory = Self::build(&codes, &alpha)?;

        let stats = directory.stats();
        info!(
            codes = %codes_path.display(),
            alpha = %alpha_path.display(),
            countries = stats.countries,
            aliases = stats.aliases,
            "directory loaded"
        );
        Ok(directory)
    }
}

/// Deserializes a JSON document from `path`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = open_stream(path)?;
    Ok(serde_json::from_reader(reader)?)
}

/// Opens a file, buffers it and, for `*.gz`, wraps it in a Gzip decoder.
/// The caller doesn't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        PickError::NotFound(format!("Data file not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(PickError::InvalidData(format!(
            "{} is gzipped but 'compact' is disabled",
            path.display()
        )))
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
