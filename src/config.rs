use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use getset::Getters;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The user-maintained tag→owner mapping, persisted as JSON so it can be
/// edited by hand between runs. The core only ever reads it.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct TagConfig {
    // Required field: a config file without it is invalid.
    #[serde(rename = "TagOwners")]
    tag_owners: HashMap<String, String>,
}

impl TagConfig {
    pub fn new(tag_owners: HashMap<String, String>) -> TagConfig {
        TagConfig { tag_owners }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path}")]
    Invalid {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads the mapping from `path`. A missing file is not an error: a default
/// config with an empty mapping is written there and returned, so the user
/// has a file to edit on the next run.
pub fn load_or_create(path: &Path) -> Result<TagConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(text) => serde_json::from_str(&text).map_err(|err| ConfigError::Invalid {
            path: path.display().to_string(),
            source: err,
        }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("config {} not found, writing default", path.display());
            let config = TagConfig::default();
            save(path, &config)?;
            Ok(config)
        },
        Err(err) => Err(ConfigError::Io {
            path: path.display().to_string(),
            source: err,
        }),
    }
}

/// Persists the mapping as indented JSON, keeping it hand-editable.
pub fn save(path: &Path, config: &TagConfig) -> Result<(), ConfigError> {
    let text = serde_json::to_string_pretty(config).map_err(|err| ConfigError::Invalid {
        path: path.display().to_string(),
        source: err,
    })?;

    fs::write(path, text).map_err(|err| ConfigError::Io {
        path: path.display().to_string(),
        source: err,
    })
}
