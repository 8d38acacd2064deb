use crate::error::{LibraryError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    pub library: LibraryConfig,
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Fight-finder endpoint; ids are appended as query parameters
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LibraryConfig {
    /// Root directory holding one subdirectory per event
    pub root: PathBuf,
    /// JSON file mapping event ids to directories under the root
    pub index_file: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetadataConfig {
    /// JSON document the metadata store persists to
    pub store_file: PathBuf,
    /// Directory of cached per-event posters, fanart and descriptions
    pub cache_dir: PathBuf,
    /// Directory of per-promotion fallback posters
    pub promotion_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    /// Strip extensions and "01. " style prefixes from listed filenames
    pub clean_filenames: bool,
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            LibraryError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://www.sherdog.com/fightfinder/fightfinder.asp".to_string(),
            timeout_seconds: 30,
            user_agent: concat!("mma_library/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            clean_filenames: true,
        }
    }
}
