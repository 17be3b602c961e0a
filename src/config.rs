use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::DEFAULT_QUOTA_BYTES;
use crate::workout::Coordinates;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Fallback position when none is given on the command line
    pub home: Option<Coordinates>,
    pub initial_zoom: u8,
    /// Zoom used when moving to a workout from the list
    pub focus_zoom: u8,
    pub animate_pan: bool,
    pub storage_quota_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home: None,
            initial_zoom: 5,
            focus_zoom: 9,
            animate_pan: true,
            storage_quota_bytes: DEFAULT_QUOTA_BYTES,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "pacemap") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("pacemap_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        if let Ok(bytes) = fs::read(&self.path) {
            match serde_json::from_slice::<Config>(&bytes) {
                Ok(cfg) => return cfg,
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %e,
                        "Ignoring invalid config"
                    )
                }
            }
        }
        Config::default()
    }
}
