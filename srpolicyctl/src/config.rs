use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use srpolicy_packet::AfiSafi;

use crate::{EncodeOptions, SourceError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub encode: EncodeOptions,
    pub family: AfiSafi,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            encode: EncodeOptions::default(),
            family: AfiSafi::SR_POLICY_IPV6,
        }
    }
}

// 1. Explicit path
// 2. HomeDir ~/.srpolicyctl.yaml
// 3. Built-in defaults

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self, SourceError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        if let Some(path) = Self::home_path()
            && path.exists()
        {
            return Self::from_file(&path);
        }
        Ok(Self::default())
    }

    pub fn home_path() -> Option<PathBuf> {
        let mut home = dirs::home_dir()?;
        home.push(".srpolicyctl.yaml");
        Some(home)
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, SourceError> {
        Ok(serde_yaml::from_str(input)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, SourceError> {
        let input = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&input)
    }
}
