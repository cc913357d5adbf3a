use pickcountry_core::Directory;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Finds a data table: as given, then two directories up (running from a
/// crate subfolder), then in the bundled data directory. Falls back to the
/// given path so the loader reports it as missing.
pub fn locate(path: &Path) -> PathBuf {
    candidates(path)
        .into_iter()
        .find(|p| p.is_file())
        .unwrap_or_else(|| path.to_path_buf())
}

fn candidates(path: &Path) -> Vec<PathBuf> {
    let mut out = vec![path.to_path_buf()];
    if path.is_relative() {
        out.push(Path::new("../..").join(path));
        if let Some(name) = path.file_name() {
            out.push(Directory::default_data_dir().join(name));
        }
    }
    debug!(?out, "data file candidates");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn existing_path_wins() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("country_codes.json");
        fs::write(&file, "{}").unwrap();
        assert_eq!(locate(&file), file);
    }

    #[test]
    fn falls_back_to_bundled_data() {
        let found = locate(Path::new("no/such/dir/country_codes.json"));
        assert_eq!(found, Directory::default_data_dir().join("country_codes.json"));
        assert!(found.is_file());
    }

    #[test]
    fn missing_absolute_path_is_returned_as_is() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("nope.json");
        assert_eq!(locate(&file), file);
    }
}
