use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{IdeaError, Result};

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory where the idea collection and theme preference live
    pub data_dir: PathBuf,

    /// Default number of ideas shown by list/search
    pub list_limit: usize,
}

impl Config {
    /// Builds a config rooted at the platform data directory, or at the
    /// given override.
    pub fn resolve(data_dir_override: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir_override {
            Some(dir) => dir,
            None => ProjectDirs::from("", "", "ideapulse")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| IdeaError::ConfigError {
                    message: "Could not determine a data directory for this platform".to_string(),
                })?,
        };

        Ok(Self {
            data_dir,
            list_limit: 10,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_platform_dir() {
        let config = Config::resolve(Some(PathBuf::from("/tmp/ideas"))).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/ideas"));
        assert_eq!(config.list_limit, 10);
    }
}
