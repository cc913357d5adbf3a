// crates/pickcountry-core/src/config.rs
use serde::{Deserialize, Serialize};

/// Number of full names shown before the list turns into a letter menu.
pub const DEFAULT_MAX_LIST_SIZE: usize = 20;

/// Picker configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window size. `0` means [`DEFAULT_MAX_LIST_SIZE`].
    pub max_list_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_list_size: DEFAULT_MAX_LIST_SIZE,
        }
    }
}

impl Config {
    pub fn new(max_list_size: usize) -> Self {
        Self { max_list_size }
    }

    /// Effective window size, never zero.
    pub fn window_size(&self) -> usize {
        match self.max_list_size {
            0 => DEFAULT_MAX_LIST_SIZE,
            n => n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_falls_back_to_default() {
        assert_eq!(Config::new(0).window_size(), DEFAULT_MAX_LIST_SIZE);
        assert_eq!(Config::new(7).window_size(), 7);
        assert_eq!(Config::default().window_size(), 20);
    }

    #[test]
    fn missing_fields_deserialize_to_default() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
    }
}
