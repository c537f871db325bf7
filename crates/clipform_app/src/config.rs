use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clipform_engine::{SubmitSettings, DEFAULT_ENDPOINT};
use clipform_logging::{clip_debug, clip_info};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "clipform.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoint: String,
    pub connect_timeout_secs: u64,
    /// Unset means the request waits for the transport to settle.
    pub request_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: None,
        }
    }
}

impl Settings {
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        self
    }

    pub fn submit_settings(&self) -> SubmitSettings {
        SubmitSettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Loads settings from `explicit`, or from `./clipform.ron` when no path was
/// given. Only the implicit default file may be missing.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<Settings> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound && !required => {
            clip_debug!("No config at {:?}; using defaults", path);
            return Ok(Settings::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config {}", path.display()));
        }
    };

    let settings: Settings =
        ron::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))?;
    clip_info!("Loaded settings from {:?}", path);
    Ok(settings)
}
