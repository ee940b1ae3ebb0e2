use crate::defaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub diarization: DiarizationConfig,
    pub session: SessionConfig,
}

/// Speaker diarization configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiarizationConfig {
    /// Cosine-similarity cutoff for joining an existing speaker profile.
    pub similarity_threshold: f32,
    /// Prefix for minted speaker labels.
    pub label_prefix: String,
    /// Label for final results that carry no embedding.
    pub unattributed_label: String,
}

/// Recognition session configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Capacity of the recognizer message queue.
    pub queue_capacity: usize,
    /// Whether the session keeps listening after a recognizer error or timeout.
    pub resume_on_error: bool,
}

impl Default for DiarizationConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: defaults::SIMILARITY_THRESHOLD,
            label_prefix: defaults::SPEAKER_LABEL_PREFIX.to_string(),
            unattributed_label: defaults::UNATTRIBUTED_SPEAKER_LABEL.to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            queue_capacity: defaults::RECOGNIZER_QUEUE_CAPACITY,
            resume_on_error: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing.
    /// Returns errors for invalid TOML.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(e) => {
                if e.downcast_ref::<std::io::Error>()
                    .map(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
                    .unwrap_or(false)
                {
                    Ok(Self::default())
                } else {
                    Err(e)
                }
            }
        }
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/diarist/config.toml on Linux
    #[cfg(feature = "cli")]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("diarist").join("config.toml"))
    }
}
