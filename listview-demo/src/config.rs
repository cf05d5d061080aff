//! Demo configuration, read from `config.json` in the config directory.

use std::fs;
use std::io;
use std::path::Path;

use listview::ListConfig;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::DemoError;

/// Everything the demo reads from its config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Behaviour of the list itself.
    pub list: ListConfig,
    /// Blank lines between two rows.
    pub spacing: f32,
    /// Frame interval while an animation runs, in milliseconds.
    pub frame_ms: u64,
    /// Insert a header row every this many items. 0 disables headers.
    pub group_size: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            list: ListConfig::default(),
            spacing: 0.0,
            frame_ms: 16,
            group_size: 10,
        }
    }
}

impl DemoConfig {
    /// Load the config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config: DemoConfig = serde_json::from_str(&text)?;
        config.list.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
